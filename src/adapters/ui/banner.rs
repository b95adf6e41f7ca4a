//! Welcome banner with gradient, followed by the app overview and usage steps.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Sky blue (#38bdf8).
const SKY_BLUE: (u8, u8, u8) = (0x38, 0xbd, 0xf8);
/// Mint (#34d399).
const MINT: (u8, u8, u8) = (0x34, 0xd3, 0x99);

pub const APP_TITLE: &str = "🤖 AI専門家相談アプリ";

const OVERVIEW: &str = "\
## 📋 アプリの概要
このアプリでは、様々な分野の専門家AIに相談できます。
専門家を選択して、質問や相談内容を入力してください。

## 🔧 操作方法
1. 専門家を選択：リストから相談したい専門家を選んでください
2. 質問を入力：質問や相談内容を入力してください
3. 相談開始：Enter で送信するとAIからの回答が表示されます";

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// ASCII art for the banner. `None` if the bundled figlet font cannot be loaded.
fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    font.convert("EXPERT CONSULT").map(|figure| figure.to_string())
}

/// Prints "EXPERT CONSULT" as figlet art with a vertical gradient, then the
/// title, version and overview.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art().unwrap_or_else(|| "EXPERT CONSULT".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(SKY_BLUE, MINT, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: MINT.0,
        g: MINT.1,
        b: MINT.2,
    }));
    let _ = out.execute(Print(format!(
        "{} v{}\r\n",
        APP_TITLE,
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.execute(ResetColor);
    let rule = "-".repeat(40);
    let _ = out.execute(Print(format!("{rule}\r\n{OVERVIEW}\r\n{rule}\r\n")));
    let _ = out.flush();
}
