// Study Planner Library
// Headless core of the planner: calendar, to-dos, notes, assignments and study timer

pub mod app;
pub mod models;
pub mod services;
pub mod utils;

pub use app::PlannerContext;
