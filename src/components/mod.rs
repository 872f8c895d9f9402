pub mod arc_diagram;
