//! # Palette Demo
//!
//! Prints every color, background and style, alone and combined.
//!
//! Run with: cargo run --example palette
//!
//! Output degrades automatically: pipe it through `cat` to see plain text.

use standout_colorize::{
    blink, bold, colorize, inverse, red, underline, Attribute, BaseColor, Style, StyledText,
};

const SAMPLE: &str = "Lorem 中 Ipsum 文";

fn main() -> Result<(), standout_colorize::ColorizeError> {
    println!("\nColors:\n");
    for color in BaseColor::ALL {
        println!("{}  <- {}", StyledText::new(SAMPLE).fg(color), color);
    }

    println!("\nBackgrounds:\n");
    for color in BaseColor::ALL {
        println!("{}  <- {}_bg", StyledText::new(SAMPLE).bg(color), color);
    }

    println!("\nStyles:\n");
    for style in Style::ALL {
        println!("{}  <- {}", StyledText::new(SAMPLE).style(style), style);
    }

    println!("\nStyles(Colors):\n");
    for style in Style::ALL {
        for color in BaseColor::ALL {
            let text = StyledText::new(SAMPLE)
                .apply(Attribute::Fg(color))
                .apply(Attribute::Style(style));
            println!("{}  <- {}({})", text, style, color);
        }
    }

    println!("\nHex and RGB:\n");
    for spec in ["#ff0000", "#0f0", "ff8700", "#5f5fd7"] {
        println!("{}  <- {}", colorize(SAMPLE, spec)?, spec);
    }
    println!("{}  <- (95, 175, 135)", colorize(SAMPLE, (95u8, 175u8, 135u8))?);

    println!("\nComplex combinations:\n");
    println!("{}  <- inverse+bold+red", inverse(bold(red(SAMPLE))));
    println!("{}  <- blink+bold+red", blink(bold(red(SAMPLE))));
    println!("{}  <- underline+bold+red", underline(bold(red(SAMPLE))));
    println!("{}  <- blink+underline+red", blink(underline(red(SAMPLE))));
    println!("{}  <- underline+inverse+red", underline(inverse(red(SAMPLE))));

    Ok(())
}
