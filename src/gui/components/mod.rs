// src/gui/components/mod.rs
pub mod player_panel;
pub mod tabs;
pub mod action_buttons;
