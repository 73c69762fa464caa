/// Integration tests for world-position to block-coordinate conversion
use cgmath::Point3;
use voxel_world::{BlockCoordinate, ChunkCoordinate, WorldConfig};

#[test]
fn test_negative_positions_floor_into_previous_chunk() {
    let config = WorldConfig::default();
    let block = BlockCoordinate::from_world_position(Point3::new(-1.0, 5.0, -0.25), &config);
    assert_eq!(block.chunk, ChunkCoordinate::new(-1, -1));
    assert_eq!((block.x, block.y, block.z), (15, 5, 15));
    assert!(!block.is_null);

    let block = BlockCoordinate::from_world_position(Point3::new(-16.0, 0.0, -17.0), &config);
    assert_eq!(block.chunk, ChunkCoordinate::new(-1, -2));
    assert_eq!((block.x, block.z), (0, 15));
}

#[test]
fn test_conversion_reconstructs_the_world_cell() {
    let config = WorldConfig::default();
    for wx in -40..40 {
        for wz in [-33, -16, -1, 0, 15, 16, 47] {
            let position = Point3::new(wx as f32 + 0.5, 3.5, wz as f32 + 0.25);
            let block = BlockCoordinate::from_world_position(position, &config);
            assert!((0..16).contains(&block.x));
            assert!((0..16).contains(&block.z));
            assert_eq!(block.world_cell(&config), (wx, 3, wz));
        }
    }
}

#[test]
fn test_pure_and_in_place_forms_agree() {
    let config = WorldConfig {
        block_length: 0.5,
        ..WorldConfig::default()
    };
    let mut reused = BlockCoordinate::null();
    for step in -100..100 {
        let position = Point3::new(step as f32 * 0.37, step as f32 * 0.11, step as f32 * -0.53);
        reused.set_from_world_position(position, &config);
        assert_eq!(reused, BlockCoordinate::from_world_position(position, &config));
    }
}

#[test]
fn test_block_length_scales_cells() {
    let config = WorldConfig {
        block_length: 0.5,
        ..WorldConfig::default()
    };
    // 8.25 / 0.5 = cell 16, the first cell of chunk 1
    let block = BlockCoordinate::from_world_position(Point3::new(8.25, 1.0, 0.0), &config);
    assert_eq!(block.chunk, ChunkCoordinate::new(1, 0));
    assert_eq!((block.x, block.y), (0, 2));
    assert_eq!(block.to_world_position(&config), Point3::new(8.0, 1.0, 0.0));
}
