pub mod route_state;
pub mod routes;
