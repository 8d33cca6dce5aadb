mod models;
mod property_tests;
