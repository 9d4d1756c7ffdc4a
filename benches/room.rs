use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parlor::games::GameKind;
use parlor::room::RoomManager;
use tokio::runtime::Runtime;

fn room_creation(c: &mut Criterion) {
  let mut group = c.benchmark_group("room_creation");
  let rt = Runtime::new().unwrap();

  group.bench_function("create_single_room", |b| {
    b.to_async(&rt).iter(|| async {
      let manager = RoomManager::new();
      black_box(manager.create_room(GameKind::Chess).await);
    });
  });

  group.bench_function("create_100_rooms", |b| {
    b.to_async(&rt).iter(|| async {
      let manager = RoomManager::new();
      for _ in 0..100 {
        black_box(manager.create_room(GameKind::BigTwo).await);
      }
    });
  });

  group.finish();
}

fn seat_operations(c: &mut Criterion) {
  let mut group = c.benchmark_group("room_seats");
  let rt = Runtime::new().unwrap();

  group.bench_function("fill_big_two_table", |b| {
    b.to_async(&rt).iter(|| async {
      let manager = RoomManager::new();
      let id = manager.create_room(GameKind::BigTwo).await;
      for (conn, name) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
        manager.join_room(&id, conn, name).await.unwrap();
      }
    });
  });

  group.bench_function("reconnect_by_name", |b| {
    b.to_async(&rt).iter(|| async {
      let manager = RoomManager::new();
      let id = manager.create_room(GameKind::Chess).await;
      manager.join_room(&id, 1, "ann").await.unwrap();
      manager.leave_room(&id, 1).await.unwrap();
      black_box(manager.join_room(&id, 2, "ann").await.unwrap());
    });
  });

  group.finish();
}

fn room_lookup(c: &mut Criterion) {
  let mut group = c.benchmark_group("room_lookup");
  let rt = Runtime::new().unwrap();

  for num_rooms in [10, 100, 1000] {
    group.bench_with_input(BenchmarkId::from_parameter(num_rooms), &num_rooms, |b, &num_rooms| {
      b.to_async(&rt).iter(|| async {
        let manager = RoomManager::new();
        let mut last = String::new();
        for _ in 0..num_rooms {
          last = manager.create_room(GameKind::Boggle).await;
        }
        black_box(manager.get_room(&last).await);
      });
    });
  }

  group.finish();
}

criterion_group!(benches, room_creation, seat_operations, room_lookup);
criterion_main!(benches);
