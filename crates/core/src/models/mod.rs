pub mod form;
pub mod stats;
pub mod timestamp;
pub mod trade;
pub mod view;
