//! Wire-format models shared between the Grouply server and its clients.

pub mod models;
