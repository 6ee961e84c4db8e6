mod configuration;
mod evaluate;
