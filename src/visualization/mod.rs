pub mod orrery_vis3d;
pub mod headless;
