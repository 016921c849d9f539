//! Asset Tests
//!
//! Tests for:
//! - AssetStorage: add, get, URI deduplication, removal
//! - AssetServer: background texture requests (success, decode failure, missing file)
//! - Degraded rendering: sprites stay untextured when their texture fails

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use image::{ImageFormat, Rgba, RgbaImage};
use slotmap::new_key_type;

use hisl_scene::app::FrameLoop;
use hisl_scene::assets::{AssetServer, AssetSource, AssetStorage, TextureSlot};
use hisl_scene::config::RavenConfig;
use hisl_scene::presets::NorseRavens;
use hisl_scene::scene::Primitive;

new_key_type! { struct TestHandle; }

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([20, 30, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn run_until_settled(frame: &mut FrameLoop) {
    let mut t = 0.0;
    for _ in 0..500 {
        frame.tick_at(t);
        if frame.pending_textures() == 0 {
            return;
        }
        t += 1.0 / 60.0;
        thread::sleep(Duration::from_millis(10));
    }
    panic!("texture requests did not settle");
}

// ============================================================================
// AssetStorage
// ============================================================================

#[test]
fn storage_add_and_get() {
    let storage = AssetStorage::<TestHandle, String>::new();
    let handle = storage.add("hello".to_string());
    assert_eq!(&*storage.get(handle).unwrap(), "hello");
    assert_eq!(storage.len(), 1);
}

#[test]
fn storage_add_with_uri_deduplicates() {
    let storage = AssetStorage::<TestHandle, String>::new();
    let h1 = storage.add_with_uri("raven.png", "first".to_string());
    let h2 = storage.add_with_uri("raven.png", "second".to_string());

    assert_eq!(h1, h2);
    assert_eq!(&*storage.get(h1).unwrap(), "first");
    assert_eq!(storage.get_handle_by_uri("raven.png"), Some(h1));
}

#[test]
fn storage_remove_clears_lookup() {
    let storage = AssetStorage::<TestHandle, i32>::new();
    let handle = storage.add_with_uri("a", 1);
    let kept = storage.get(handle).unwrap();

    assert_eq!(storage.remove(handle).as_deref(), Some(&1));
    assert!(storage.get(handle).is_none());
    assert!(storage.get_handle_by_uri("a").is_none());
    assert!(storage.is_empty());
    // Outstanding references stay valid
    assert_eq!(*kept, 1);
}

// ============================================================================
// Texture requests
// ============================================================================

#[test]
fn request_decodes_in_memory_png() {
    let assets = AssetServer::new();
    let request = assets.request_texture(AssetSource::bytes("raven", png_bytes(4, 2)));
    assert_eq!(request.uri(), "memory://raven");

    let slot = request.wait();
    let handle = slot.handle().expect("texture should load");
    let texture = assets.get_texture(handle).unwrap();
    assert_eq!((texture.width, texture.height), (4, 2));
    assert_eq!(texture.data.len(), 4 * 2 * 4);
    assert_eq!(&texture.data[..4], &[20, 30, 40, 255]);
    assert!((texture.aspect_ratio() - 2.0).abs() < f32::EPSILON);
}

#[test]
fn request_same_uri_reuses_texture() {
    let assets = AssetServer::new();
    let a = assets.request_texture(AssetSource::bytes("raven", png_bytes(2, 2))).wait();
    let b = assets.request_texture(AssetSource::bytes("raven", png_bytes(2, 2))).wait();
    assert_eq!(a, b);
    assert_eq!(assets.textures.len(), 1);
}

#[test]
fn request_with_garbage_bytes_fails() {
    let assets = AssetServer::new();
    let slot = assets
        .request_texture(AssetSource::bytes("broken", vec![0_u8, 1, 2, 3]))
        .wait();
    assert_eq!(slot, TextureSlot::Failed);
    assert!(slot.handle().is_none());
    assert!(assets.textures.is_empty());
}

#[test]
fn request_missing_file_fails() {
    let assets = AssetServer::new();
    let slot = assets
        .request_texture(AssetSource::path("definitely/not/here/raven.png"))
        .wait();
    assert_eq!(slot, TextureSlot::Failed);
}

#[test]
fn poll_never_blocks_and_settles_once() {
    let assets = AssetServer::new();
    let mut request = assets.request_texture(AssetSource::bytes("raven", png_bytes(1, 1)));

    let mut slot = request.poll();
    for _ in 0..500 {
        if slot.is_settled() {
            break;
        }
        thread::sleep(Duration::from_millis(10));
        slot = request.poll();
    }
    assert!(slot.is_ready());
    assert_eq!(request.poll(), slot);
    assert_eq!(request.slot(), slot);
}

#[test]
fn texture_slot_helpers() {
    assert_eq!(TextureSlot::default(), TextureSlot::Pending);
    assert!(!TextureSlot::Pending.is_settled());
    assert!(TextureSlot::Failed.is_settled());
    assert!(!TextureSlot::Failed.is_ready());
    assert!(TextureSlot::Pending.handle().is_none());
}

// ============================================================================
// Degraded rendering
// ============================================================================

#[test]
fn ravens_keep_animating_without_texture() {
    let mut frame = FrameLoop::new();
    let config = RavenConfig {
        texture: "definitely/not/here/raven.png".into(),
        ..RavenConfig::default()
    };
    let ravens = NorseRavens::mount(&mut frame, &config);
    assert_eq!(frame.pending_textures(), 2);

    run_until_settled(&mut frame);

    for &handle in &ravens.sprites {
        let node = frame.scene.get_node(handle).unwrap();
        let Primitive::Sprite(sprite) = &node.primitive else {
            panic!("expected a sprite");
        };
        assert_eq!(sprite.material.map, TextureSlot::Failed);
    }

    let stats = frame.tick_at(100.0);
    assert_eq!(stats.transforms_written, 2);
}

#[test]
fn ravens_pick_up_texture_when_ready() {
    let dir = std::env::temp_dir().join(format!("hisl-scene-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("raven.png");
    std::fs::write(&path, png_bytes(8, 8)).unwrap();

    let mut frame = FrameLoop::new();
    let config = RavenConfig {
        texture: path.to_string_lossy().into_owned(),
        ..RavenConfig::default()
    };
    let ravens = NorseRavens::mount(&mut frame, &config);
    run_until_settled(&mut frame);

    let maps: Vec<_> = ravens
        .sprites
        .iter()
        .map(|&h| {
            frame.scene.get_node(h).unwrap().primitive.as_sprite().unwrap().material.map
        })
        .collect();
    assert!(maps.iter().all(|slot| slot.is_ready()));
    assert_eq!(maps[0], maps[1]);

    std::fs::remove_dir_all(&dir).ok();
}
