pub mod use_active_section;
