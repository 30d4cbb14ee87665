pub mod course;
pub mod final_slide;
pub mod menu;
pub mod playground;
pub mod quiz;
pub mod results;
pub mod welcome;
