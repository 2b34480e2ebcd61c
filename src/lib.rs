//! Sales Dashboard - Sales, Price & Quantity Over Time
//!
//! Loads a daily sales CSV once, then renders two linked time-series charts
//! (sales + price, quantity + price) that follow a region picker.

pub mod charts;
pub mod cli;
pub mod config;
pub mod controller;
pub mod data;
pub mod gui;
