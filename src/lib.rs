pub mod browser;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod generation;
pub mod image;
pub mod models;
pub mod notifications;
pub mod repository;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
