//! Welcome banner with a vertical gradient (SCHOOL).
//! Uses figlet's built-in standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Chalkboard green (#2e7d32).
const CHALK_GREEN: (u8, u8, u8) = (0x2e, 0x7d, 0x32);
/// School-bus yellow (#ffd600).
const BUS_YELLOW: (u8, u8, u8) = (0xff, 0xd6, 0x00);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("SCHOOL").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "SCHOOL REGISTRY".to_string())
}

/// Prints "SCHOOL" in ASCII art with a gradient from chalkboard green to
/// school-bus yellow, then the version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CHALK_GREEN, BUS_YELLOW, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: BUS_YELLOW.0,
        g: BUS_YELLOW.1,
        b: BUS_YELLOW.2,
    }));
    let _ = out.execute(Print(format!("school-registry v{}\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
