pub mod core {
    pub mod gui;
    pub mod map_view;
}
