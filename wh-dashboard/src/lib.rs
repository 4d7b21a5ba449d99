//! Client-side synchronisation and visualisation pipeline for the WeatherHub
//! dashboard.
//!
//! Data flows one way: a user action enters the [`controller::Dashboard`],
//! which calls the gateway, replaces fields of the [`store::ViewState`],
//! recomputes [`derive`]d data and projects the state onto the retained
//! [`render::Screen`]. Chart redraws go through the debouncing
//! [`scheduler::RedrawScheduler`].
//!
//! Everything here runs on a single-threaded event loop. Shared pieces are
//! `Rc<RefCell<_>>` and no borrow is held across an `.await`.

pub mod charts;
pub mod controller;
pub mod derive;
pub mod error;
pub mod notice;
pub mod render;
pub mod scheduler;
pub mod sequence;
pub mod store;
pub mod timer;
