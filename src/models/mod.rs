// Module exports for models

pub mod assignment;
pub mod day_cell;
pub mod event;
pub mod note;
pub mod settings;
pub mod timer;
pub mod todo;
