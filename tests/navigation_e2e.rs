use actix_web::{test, web, App};
use gridwalk::{
    api::routes::configure,
    data::maps::default_map,
    models::grid::GridMap,
};

fn build_app(
    grid: GridMap,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(grid))
        .configure(configure)
}

fn path_of(body: &serde_json::Value) -> Vec<(i64, i64)> {
    body["path"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .map(|cell| (cell[0].as_i64().unwrap_or(i64::MIN), cell[1].as_i64().unwrap_or(i64::MIN)))
        .collect()
}

async fn walk(grid: GridMap, start: [i64; 2], goal: [i64; 2]) -> Vec<(i64, i64)> {
    let app = test::init_service(build_app(grid)).await;
    let req = test::TestRequest::post()
        .uri("/calculate-path")
        .set_json(serde_json::json!({ "start": start, "goal": goal }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    path_of(&body)
}

// ---------------------------------------------------------------------------
// Scenario 1: from the player start to the top-left corner, around the pond
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_player_start_to_corner() {
    let path = walk(default_map().unwrap(), [2, 2], [0, 0]).await;
    assert_eq!(path, vec![(2, 2), (1, 2), (0, 2), (0, 1), (0, 0)]);
    assert!(!path.contains(&(1, 1)), "Water at (1,1) must be avoided");
}

// ---------------------------------------------------------------------------
// Scenario 2: start and goal are the same cell
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_start_is_goal() {
    let path = walk(default_map().unwrap(), [0, 0], [0, 0]).await;
    assert_eq!(path, vec![(0, 0)]);
}

// ---------------------------------------------------------------------------
// Scenario 3: start surrounded by water on all four sides
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_enclosed_start() {
    use gridwalk::models::terrain::Terrain::{Grass as G, PlayerStart as P, Water as W};
    let island = GridMap::new(vec![
        vec![G, G, G, G, G],
        vec![G, G, W, G, G],
        vec![G, W, P, W, G],
        vec![G, G, W, G, G],
        vec![G, G, G, G, G],
    ])
    .unwrap();
    let path = walk(island, [2, 2], [4, 4]).await;
    assert_eq!(path, vec![(2, 2)], "No step is possible out of the enclosure");
}

// ---------------------------------------------------------------------------
// Scenario 4: goal behind water on the only remaining axis
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_unreachable_goal_returns_partial_path() {
    let path = walk(default_map().unwrap(), [0, 3], [4, 3]).await;
    assert_eq!(path, vec![(0, 3)]);
    assert_ne!(path.last(), Some(&(4, 3)), "Partial paths end before the goal");
}

// ---------------------------------------------------------------------------
// Scenario 5: every route on the default map is a chain of orthogonal steps
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_all_routes_are_contiguous() {
    let app = test::init_service(build_app(default_map().unwrap())).await;
    for start in [[0, 0], [2, 2], [4, 4], [0, 4], [4, 0]] {
        for goal in [[0, 0], [0, 2], [2, 0], [4, 4], [3, 1]] {
            let req = test::TestRequest::post()
                .uri("/calculate-path")
                .set_json(serde_json::json!({ "start": start, "goal": goal }))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            let path = path_of(&body);
            assert_eq!(path.first(), Some(&(start[0], start[1])));
            for pair in path.windows(2) {
                let dist = (pair[0].0 - pair[1].0).abs() + (pair[0].1 - pair[1].1).abs();
                assert_eq!(dist, 1, "{:?} -> {:?} is not a single step", pair[0], pair[1]);
            }
        }
    }
}
