// Domain layer - Models and the sample aggregation core
pub mod chart;
pub mod map;
pub mod sample;
pub mod series;
pub mod table;
pub mod time;
