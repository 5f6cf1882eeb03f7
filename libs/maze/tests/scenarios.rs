use maze::{Maze, MazeConfig, Submesh};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn default_request_is_reproducible() {
    init_logger();
    let config = MazeConfig::default();

    let a = Maze::generate(13, 15, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = Maze::generate(13, 15, &config, &mut StdRng::seed_from_u64(7)).unwrap();

    assert_eq!(a, b);
    assert_eq!((a.grid().rows(), a.grid().cols()), (13, 15));
}

#[test]
fn markers_are_open_cells() {
    let maze = Maze::generate(21, 21, &MazeConfig::default(), &mut StdRng::seed_from_u64(3)).unwrap();
    for cell in [maze.start(), maze.goal()].into_iter().flatten() {
        assert!(maze.grid().is_open(cell.row, cell.col));
    }
    for trigger in maze.triggers() {
        assert!(maze.grid().is_open(trigger.cell.row, trigger.cell.col));
    }
}

/// Threshold 1 leaves only the border: one open rectangle.
#[test]
fn open_field_spans_interior() {
    let config = MazeConfig::default().with_placement_threshold(1.0);
    let maze = Maze::generate(5, 7, &config, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(maze.grid().open_count(), 3 * 5);
    assert_eq!(maze.start().map(|p| (p.row, p.col)), Some((1, 1)));
    assert_eq!(maze.goal().map(|p| (p.row, p.col)), Some((3, 5)));
    assert_eq!(maze.mesh().quad_count(Submesh::FloorAndCeiling), 30);
    // perimeter of a 3x5 room
    assert_eq!(maze.mesh().quad_count(Submesh::Walls), 2 * (3 + 5));
}

#[test]
fn debug_dump_reflects_grid() {
    let maze = Maze::single_room(&MazeConfig::default()).unwrap();
    assert_eq!(maze.grid().to_string(), "======\n==....==\n======\n");
}
