//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons so components never reference
//! icon-set names directly. Gallery panel icons live with the panel content.

use icondata::Icon;

pub const MENU: Icon = icondata::LuMenu;
pub const CLOSE: Icon = icondata::LuX;
pub const SUN: Icon = icondata::LuSun;
pub const MOON: Icon = icondata::LuMoon;
pub const ARROW_RIGHT: Icon = icondata::LuArrowRight;
pub const CHECK: Icon = icondata::LuCheck;
pub const CROSS: Icon = icondata::LuX;
pub const MESSAGE: Icon = icondata::LuMessageSquare;
