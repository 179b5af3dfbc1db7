//! Terminal stand-in for the physical LED strip.

use std::io::{self, Write};

use smart_leds::{brightness, gamma, SmartLedsWrite, RGB8};

/// Glyph drawn for each LED.
const LED_GLYPH: &str = "●";

/// Renders each written frame as one line of ANSI true-color glyphs,
/// overwriting the previous frame.
pub struct TerminalStrip<W: Write> {
    out: W,
}

impl<W: Write> TerminalStrip<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Finish the current line so later output does not overwrite the ring.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SmartLedsWrite for TerminalStrip<W> {
    type Error = io::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        write!(self.out, "\r")?;
        for led in iterator {
            let RGB8 { r, g, b } = led.into();
            write!(self.out, "\x1b[38;2;{r};{g};{b}m{LED_GLYPH} ")?;
        }
        write!(self.out, "\x1b[0m")?;
        self.out.flush()
    }
}

/// Pushes ring frames to a strip with gamma correction and brightness.
pub struct LedController<S> {
    driver: S,
    brightness: u8,
}

impl<S> LedController<S>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(driver: S, initial_brightness: u8) -> Self {
        Self {
            driver,
            brightness: initial_brightness,
        }
    }

    pub fn write_leds(&mut self, leds: &[RGB8]) -> Result<(), S::Error> {
        // Apply gamma correction first, then brightness reduction
        // as recommended by smart-leds docs
        self.driver
            .write(brightness(gamma(leds.iter().copied()), self.brightness))
    }

    pub fn driver_mut(&mut self) -> &mut S {
        &mut self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_strip_renders_colors() {
        let mut strip = TerminalStrip::new(Vec::new());
        strip
            .write([RGB8::new(255, 0, 0), RGB8::new(0, 0, 0)].iter().copied())
            .unwrap();

        let text = String::from_utf8(strip.into_inner()).unwrap();
        assert!(text.starts_with('\r'));
        assert!(text.contains("\x1b[38;2;255;0;0m●"));
        assert!(text.contains("\x1b[38;2;0;0;0m●"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_controller_applies_brightness() {
        let mut controller = LedController::new(TerminalStrip::new(Vec::new()), 0);
        controller.write_leds(&[RGB8::new(255, 255, 255)]).unwrap();

        let strip = std::mem::replace(controller.driver_mut(), TerminalStrip::new(Vec::new()));
        let text = String::from_utf8(strip.into_inner()).unwrap();
        assert!(text.contains("\x1b[38;2;0;0;0m"), "{text:?}");
    }

    #[test]
    fn test_controller_full_brightness_keeps_white() {
        let mut controller = LedController::new(TerminalStrip::new(Vec::new()), 255);
        controller.write_leds(&[RGB8::new(255, 255, 255)]).unwrap();

        let strip = std::mem::replace(controller.driver_mut(), TerminalStrip::new(Vec::new()));
        let text = String::from_utf8(strip.into_inner()).unwrap();
        assert!(text.contains("\x1b[38;2;255;255;255m"), "{text:?}");
    }
}
