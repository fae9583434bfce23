// Service module exports

pub mod assignment;
pub mod calendar;
pub mod clock;
pub mod database;
pub mod event;
pub mod id;
pub mod note;
pub mod persistence;
pub mod settings;
pub mod storage;
pub mod timer;
pub mod todo;
