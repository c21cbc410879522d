mod chart;
mod models;
