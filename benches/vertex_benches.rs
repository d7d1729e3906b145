use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ico_vertex::*;

#[derive(Debug, Clone, Copy)]
struct BenchCell {
  face: i32,
  base_cell: i32,
  leading_digit: Direction,
  pentagon: bool,
}

struct BenchTopology;

impl CellTopology for BenchTopology {
  type Cell = BenchCell;

  fn projected_face(&self, cell: BenchCell) -> Result<i32, GridError> {
    Ok(cell.face)
  }

  fn base_cell(&self, cell: BenchCell) -> Result<i32, GridError> {
    Ok(cell.base_cell)
  }

  fn leading_non_zero_digit(&self, cell: BenchCell) -> Direction {
    cell.leading_digit
  }

  fn is_pentagon(&self, cell: BenchCell) -> bool {
    cell.pentagon
  }

  fn is_polar_pentagon(&self, base_cell: i32) -> bool {
    base_cell == 4 || base_cell == 117
  }

  fn home_face(&self, base_cell: i32) -> Result<i32, GridError> {
    // Home faces for the cells exercised below.
    match base_cell {
      20 => Ok(7),
      49 => Ok(14),
      _ => Err(GridError::CellInvalid),
    }
  }

  fn intrinsic_rotations(&self, _base_cell: i32, _face: i32) -> Result<i32, GridError> {
    Ok(0)
  }
}

fn bench_vertex_rotations(c: &mut Criterion) {
  let topo = BenchTopology;
  let hexagon = BenchCell {
    face: 7,
    base_cell: 20,
    leading_digit: Direction::Center,
    pentagon: false,
  };
  let pentagon_child = BenchCell {
    face: 5,
    base_cell: 49,
    leading_digit: Direction::JkAxes,
    pentagon: false,
  };

  c.bench_function("vertex_rotations hexagon", |b| {
    b.iter(|| vertex_rotations(&topo, black_box(hexagon)))
  });
  c.bench_function("vertex_rotations pentagon child", |b| {
    b.iter(|| vertex_rotations(&topo, black_box(pentagon_child)))
  });
}

fn bench_vertex_num_for_direction(c: &mut Criterion) {
  let topo = BenchTopology;
  let hexagon = BenchCell {
    face: 7,
    base_cell: 20,
    leading_digit: Direction::Center,
    pentagon: false,
  };

  c.bench_function("vertex_num_for_direction all directions", |b| {
    b.iter(|| {
      for direction in [
        Direction::KAxes,
        Direction::JAxes,
        Direction::JkAxes,
        Direction::IAxes,
        Direction::IkAxes,
        Direction::IjAxes,
      ] {
        let _ = vertex_num_for_direction(&topo, black_box(hexagon), direction);
      }
    })
  });
}

criterion_group!(benches, bench_vertex_rotations, bench_vertex_num_for_direction);
criterion_main!(benches);
