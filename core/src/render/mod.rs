pub mod control_points;
pub mod flight_plans;
pub mod ground_objects;
pub mod supply_routes;

pub use control_points::ControlPointRenderer;
pub use flight_plans::FlightPlanRenderer;
pub use ground_objects::GroundObjectRenderer;
pub use supply_routes::SupplyRouteRenderer;
