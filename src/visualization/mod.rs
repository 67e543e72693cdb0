pub mod orbit_vis2d;
