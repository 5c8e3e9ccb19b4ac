pub mod page_routes;
pub mod predict_routes;
