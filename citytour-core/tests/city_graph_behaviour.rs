//! Behavioural tests for `CityGraph` mutation rules.

use std::cell::RefCell;

use citytour_core::{CityGraph, EdgeWeight, GraphError, Metric};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct GraphWorld {
    graph: RefCell<CityGraph>,
    last_error: RefCell<Option<GraphError>>,
}

impl GraphWorld {
    fn record(&self, outcome: Result<(), GraphError>) {
        self.last_error.replace(outcome.err());
    }
}

#[fixture]
fn world() -> GraphWorld {
    GraphWorld::default()
}

fn origin() -> Coord<f64> {
    Coord { x: 0.0, y: 0.0 }
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn unit_weight() -> EdgeWeight {
    EdgeWeight::new(1.0, 2.0, 3.0).expect("valid weight")
}

#[given("an empty city graph")]
fn given_empty_graph(world: &GraphWorld) {
    world.graph.replace(CityGraph::new());
}

#[when("I add the city \"X\" twice")]
fn when_add_twice(world: &GraphWorld) {
    let mut graph = world.graph.borrow_mut();
    let first = graph.add_city("X", origin()).map(|_| ());
    assert!(first.is_ok(), "first insert should succeed");
    let second = graph.add_city("X", origin()).map(|_| ());
    drop(graph);
    world.record(second);
}

#[when("I add the city \"X\" once")]
fn when_add_once(world: &GraphWorld) {
    let outcome = world.graph.borrow_mut().add_city("X", origin()).map(|_| ());
    world.record(outcome);
}

#[when("I add a route from \"X\" to \"X\"")]
fn when_add_self_loop(world: &GraphWorld) {
    let outcome = world.graph.borrow_mut().add_route("X", "X", unit_weight());
    world.record(outcome);
}

#[when("I add the cities \"A\" and \"B\" with a route between them")]
fn when_add_pair(world: &GraphWorld) {
    let mut graph = world.graph.borrow_mut();
    let outcome = graph
        .add_city("A", origin())
        .and_then(|_| graph.add_city("B", origin()))
        .and_then(|_| graph.add_route("A", "B", unit_weight()));
    drop(graph);
    world.record(outcome);
}

#[then("the second insert reports a duplicate city")]
fn then_duplicate(world: &GraphWorld) {
    assert_eq!(
        *world.last_error.borrow(),
        Some(GraphError::DuplicateCity {
            name: "X".to_owned()
        })
    );
}

#[then("the graph holds one city")]
fn then_one_city(world: &GraphWorld) {
    assert_eq!(world.graph.borrow().len(), 1);
}

#[then("the route is rejected as a self loop")]
fn then_self_loop(world: &GraphWorld) {
    assert_eq!(
        *world.last_error.borrow(),
        Some(GraphError::SelfLoopRoute {
            name: "X".to_owned()
        })
    );
}

#[then("the graph has no routes")]
fn then_no_routes(world: &GraphWorld) {
    let graph = world.graph.borrow();
    assert_eq!(graph.route_count(), 0);
    assert_eq!(graph.edge(0, 0), None);
}

#[then("the route weight from \"A\" to \"B\" equals the weight from \"B\" to \"A\"")]
fn then_symmetric(world: &GraphWorld) {
    assert!(world.last_error.borrow().is_none(), "setup should succeed");
    let graph = world.graph.borrow();
    for metric in Metric::ALL {
        let forward = graph.weight_between(0, 1, metric);
        assert!(forward.is_some(), "route should exist for {metric}");
        assert_eq!(forward, graph.weight_between(1, 0, metric));
    }
}

#[scenario(path = "tests/features/city_graph.feature", index = 0)]
fn duplicate_city(world: GraphWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/city_graph.feature", index = 1)]
fn self_loop_route(world: GraphWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/city_graph.feature", index = 2)]
fn symmetric_route(world: GraphWorld) {
    let _ = world;
}
