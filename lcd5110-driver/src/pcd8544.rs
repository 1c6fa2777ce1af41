//! PCD8544 display session
//!
//! Owns the bus and control-line capabilities, runs the controller
//! initialization sequence and exposes the drawing API. All drawing goes
//! through two private primitives mirroring the controller protocol:
//! `set_position` emits the Y/X addressing commands and resynchronizes the
//! tracked write offset, `write_data_block` pushes bytes in data mode and
//! mirrors them into the shadow framebuffer while the controller
//! auto-increments its own pointer in lockstep.

use crate::font::{FontTable, LARGE_BAND_LEN};
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};
use lcd5110_hal::delay::Delay;
use lcd5110_hal::gpio::{LineDriver, LineId};
use lcd5110_hal::pins::map_header_pin;
use lcd5110_hal::spi::{SpiBus, SpiHost};

/// SPI clock rate the bus is opened at
pub const SPI_CLOCK_HZ: u32 = 4_000_000;

/// PCD8544 commands
///
/// The controller has two instruction namespaces selected by the function
/// set command: contrast, temperature and bias live in the extended set.
mod cmd {
    /// Function set: basic instruction set, horizontal addressing
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set with the extended instruction bit
    pub const FUNCTION_SET_EXTENDED: u8 = 0x21;
    /// Function set with the power-down bit
    pub const POWER_DOWN: u8 = 0x24;
    /// Display control: normal (non-inverted) mode
    pub const DISPLAY_NORMAL: u8 = 0x0C;
    /// Set Y address of RAM (page), basic set
    pub const SET_Y_ADDR: u8 = 0x40;
    /// Set X address of RAM (column), basic set
    pub const SET_X_ADDR: u8 = 0x80;
    /// Set Vop (contrast), extended set
    pub const SET_VOP: u8 = 0x80;
    /// Default Vop value programmed at init
    pub const VOP_DEFAULT: u8 = 0xA4;
    /// Temperature coefficient, extended set
    pub const TEMP_CONTROL: u8 = 0x04;
    /// Bias system 1:40, extended set
    pub const BIAS_1_40: u8 = 0x14;
}

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Created but `init` has not run (or failed)
    Uninitialized,
    /// Hardware initialized, drawing operations accepted
    Ready,
    /// Shut down; terminal
    ShutDown,
}

/// Errors reported by the display session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Operation attempted before `init` or after `shutdown`
    NotInitialized,
    /// A control-line header position did not map to a usable GPIO line
    InvalidPin,
    /// The SPI transport could not be opened
    BusOpenFailed(E),
    /// The transport rejected a transfer; shadow state keeps the value the
    /// write carried, and the session stays Ready
    Bus(E),
    /// Coordinates or text length exceed the fixed display geometry
    OutOfBounds,
}

/// Font selection for [`Pcd8544::write_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 8x8, one page tall, up to 10 characters per row
    Small,
    /// 16x24, three pages tall, up to 5 characters per row
    Large,
}

/// Hardware wiring for [`Pcd8544::init`]
///
/// Pin numbers are physical header positions, translated through
/// [`map_header_pin`] before any hardware is touched.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// SPI channel number
    pub channel: u8,
    /// Data/command select line
    pub dc_pin: u8,
    /// Active-low controller reset line
    pub reset_pin: u8,
    /// Backlight LED line (active low)
    pub led_pin: u8,
}

/// Resolved control lines, available from init onward
#[derive(Clone, Copy)]
struct ControlLines {
    dc: LineId,
    reset: LineId,
    led: LineId,
}

/// Display session for one PCD8544 panel
///
/// Single-threaded and fully synchronous: every drawing call completes its
/// bus transfer before returning. The session exclusively owns the bus
/// handle from a successful `init` until `shutdown`.
pub struct Pcd8544<H: SpiHost, L, D> {
    host: H,
    lines: L,
    delay: D,
    bus: Option<H::Bus>,
    control: Option<ControlLines>,
    state: State,
    /// Shadow copy of display memory; never read back from the controller
    shadow: Framebuffer,
    /// Mirror of the controller's auto-increment write pointer
    cursor: usize,
    font: Option<FontTable>,
}

impl<H, L, D> Pcd8544<H, L, D>
where
    H: SpiHost,
    L: LineDriver,
    D: Delay,
{
    /// Create an uninitialized session
    pub fn new(host: H, lines: L, delay: D) -> Self {
        Self {
            host,
            lines,
            delay,
            bus: None,
            control: None,
            state: State::Uninitialized,
            shadow: Framebuffer::new(),
            cursor: 0,
            font: None,
        }
    }

    /// Current session state
    pub fn state(&self) -> State {
        self.state
    }

    /// Initialize the controller and enter the Ready state
    ///
    /// Maps the control-line pins, opens the bus at [`SPI_CLOCK_HZ`], pulses
    /// reset, programs contrast/temperature/bias, clears display memory and
    /// rotates the font tables. Pin mapping failures happen before any
    /// hardware access. Any failure leaves the session Uninitialized with
    /// its resources released, so `init` can be retried.
    ///
    /// Rejected on a session that is not Uninitialized - shutdown is
    /// terminal, a fresh panel needs a fresh session.
    pub fn init(&mut self, config: Config) -> Result<(), Error<H::Error>> {
        if self.state != State::Uninitialized {
            return Err(Error::NotInitialized);
        }

        let dc = map_header_pin(config.dc_pin).map_err(|_| Error::InvalidPin)?;
        let reset = map_header_pin(config.reset_pin).map_err(|_| Error::InvalidPin)?;
        let led = map_header_pin(config.led_pin).map_err(|_| Error::InvalidPin)?;

        let bus = self
            .host
            .open(config.channel, SPI_CLOCK_HZ)
            .map_err(Error::BusOpenFailed)?;
        self.bus = Some(bus);

        self.lines.configure_output(dc);
        self.lines.configure_output(reset);
        self.lines.configure_output(led);
        self.control = Some(ControlLines { dc, reset, led });

        // Reset pulse, then take the controller out of reset
        self.lines.set_level(reset, true);
        self.delay.delay_ms(50);
        self.lines.set_level(reset, false);
        self.delay.delay_ms(5);
        self.lines.set_level(reset, true);

        self.backlight_level(true);

        if let Err(err) = self.configure_controller() {
            // Release everything so the session stays re-initializable
            // instead of half-configured
            self.bus = None;
            self.control = None;
            self.shadow = Framebuffer::new();
            self.cursor = 0;
            return Err(err);
        }

        self.font = Some(FontTable::build());
        self.state = State::Ready;
        Ok(())
    }

    /// Controller setup sequence plus the initial clear
    ///
    /// Contrast, temperature and bias live in the extended instruction set;
    /// return to the basic set before enabling normal display mode.
    fn configure_controller(&mut self) -> Result<(), Error<H::Error>> {
        self.write_command(cmd::FUNCTION_SET_EXTENDED)?;
        self.write_command(cmd::VOP_DEFAULT)?;
        self.write_command(cmd::TEMP_CONTROL)?;
        self.write_command(cmd::BIAS_1_40)?;
        self.write_command(cmd::FUNCTION_SET)?;
        self.write_command(cmd::DISPLAY_NORMAL)?;
        self.write_full_frame(0)
    }

    /// Power the controller down and release the bus
    ///
    /// Safe to call any number of times; only the first call from Ready
    /// does anything. The state becomes ShutDown and never leaves it.
    pub fn shutdown(&mut self) {
        if self.state != State::Ready {
            return;
        }
        self.backlight_level(false);
        // A transport failure here is unrecoverable anyway; the controller
        // loses the command but the session still releases its resources
        let _ = self.write_command(cmd::POWER_DOWN);
        self.bus = None;
        self.state = State::ShutDown;
    }

    /// Switch the backlight LED
    ///
    /// No-op before `init` has resolved the control lines.
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight_level(on);
    }

    /// Program the contrast (Vop) register
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<H::Error>> {
        self.require_ready()?;
        self.write_command(cmd::FUNCTION_SET_EXTENDED)?;
        self.write_command(cmd::SET_VOP | contrast)?;
        self.write_command(cmd::FUNCTION_SET)
    }

    /// Set or clear a single pixel
    ///
    /// Reads the containing byte from the shadow buffer; if the pixel
    /// already has the requested value no bus traffic is generated at all.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) -> Result<(), Error<H::Error>> {
        self.require_ready()?;
        let index = Framebuffer::byte_index(x, y).ok_or(Error::OutOfBounds)?;

        let old = self.shadow.byte_at(index);
        let mask = 1 << (y & 7);
        let new = if on { old | mask } else { old & !mask };
        if new == old {
            return Ok(());
        }

        self.set_position(x, y >> 3)?;
        self.write_data_block(&[new])
    }

    /// Read a pixel from the shadow buffer
    ///
    /// Never errors: off-grid coordinates and sessions that are not Ready
    /// read as off, so bulk readers need no bounds or state checks.
    pub fn get_pixel(&self, x: u8, y: u8) -> bool {
        if self.state != State::Ready {
            return false;
        }
        self.shadow.pixel(x, y)
    }

    /// Fill all of display memory with a byte pattern
    ///
    /// `0x00` clears the screen, `0xFF` lights every pixel. Always writes
    /// all 6 pages regardless of current content.
    pub fn fill(&mut self, value: u8) -> Result<(), Error<H::Error>> {
        self.require_ready()?;
        self.write_full_frame(value)
    }

    fn write_full_frame(&mut self, value: u8) -> Result<(), Error<H::Error>> {
        let row = [value; WIDTH];
        for page in 0..PAGES as u8 {
            self.set_position(0, page)?;
            self.write_data_block(&row)?;
        }
        Ok(())
    }

    /// Draw a string at column `x`, page row `y`
    ///
    /// Text is treated as a byte sequence indexing the glyph tables. It is
    /// clamped to the space remaining right of `x`; if no glyph fits at all
    /// the call fails with `OutOfBounds` and writes nothing. Small glyphs
    /// are 8 pixels wide and one page tall, large glyphs 16 pixels wide and
    /// three pages tall.
    pub fn write_string(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        font: FontSize,
    ) -> Result<(), Error<H::Error>> {
        self.require_ready()?;
        match font {
            FontSize::Small => self.write_small(x, y, text),
            FontSize::Large => self.write_large(x, y, text),
        }
    }

    fn write_small(&mut self, x: u8, y: u8, text: &str) -> Result<(), Error<H::Error>> {
        if y as usize >= PAGES {
            return Err(Error::OutOfBounds);
        }
        let avail = (WIDTH as i32 - x as i32) / 8;
        if avail <= 0 {
            return Err(Error::OutOfBounds);
        }
        let len = text.len().min(avail as usize);

        // One positioning, then the controller's auto-increment carries
        // each 8-byte glyph block to the right of the previous one
        self.set_position(x, y)?;
        for &code in &text.as_bytes()[..len] {
            let glyph = *self.font()?.small(code);
            self.write_data_block(&glyph)?;
        }
        Ok(())
    }

    fn write_large(&mut self, x: u8, y: u8, text: &str) -> Result<(), Error<H::Error>> {
        if y as usize + 3 > PAGES {
            return Err(Error::OutOfBounds);
        }
        let avail = 5 - x as i32;
        if avail <= 0 {
            return Err(Error::OutOfBounds);
        }
        let len = text.len().min(avail as usize);
        let codes = &text.as_bytes()[..len];

        // The large table only has 128 entries; reject out-of-range codes
        // before any bus traffic rather than render from a bogus index
        if codes.iter().any(|&code| code as usize >= crate::font::LARGE_GLYPHS) {
            return Err(Error::OutOfBounds);
        }

        for (i, &code) in codes.iter().enumerate() {
            let glyph = match self.font()?.large(code) {
                Some(glyph) => *glyph,
                None => return Err(Error::OutOfBounds),
            };
            let column = x + (i as u8) * 16;
            for band in 0..3 {
                self.set_position(column, y + band as u8)?;
                let block = &glyph[band * LARGE_BAND_LEN..(band + 1) * LARGE_BAND_LEN];
                self.write_data_block(block)?;
            }
        }
        Ok(())
    }

    /// Emit the addressing commands for `(x, page)` and resync the cursor
    fn set_position(&mut self, x: u8, page: u8) -> Result<(), Error<H::Error>> {
        self.write_command(cmd::SET_Y_ADDR | page)?;
        self.write_command(cmd::SET_X_ADDR | x)?;
        self.cursor = page as usize * WIDTH + x as usize;
        Ok(())
    }

    /// Send one command byte with the D/C line low
    fn write_command(&mut self, command: u8) -> Result<(), Error<H::Error>> {
        let control = self.control.ok_or(Error::NotInitialized)?;
        self.lines.set_level(control.dc, false);
        let bus = self.bus.as_mut().ok_or(Error::NotInitialized)?;
        bus.write(&[command]).map_err(Error::Bus)
    }

    /// Send data bytes with the D/C line high, mirroring them into the
    /// shadow buffer at the current cursor
    ///
    /// Shadow and cursor are updated even when the transport rejects the
    /// transfer, so the host-side state matches what the paired hardware
    /// write was meant to leave behind.
    fn write_data_block(&mut self, data: &[u8]) -> Result<(), Error<H::Error>> {
        let control = self.control.ok_or(Error::NotInitialized)?;
        self.shadow
            .write_block(self.cursor, data)
            .map_err(|_| Error::OutOfBounds)?;
        self.cursor += data.len();

        self.lines.set_level(control.dc, true);
        let bus = self.bus.as_mut().ok_or(Error::NotInitialized)?;
        bus.write(data).map_err(Error::Bus)
    }

    fn backlight_level(&mut self, on: bool) {
        // The LED line sinks the backlight: low = lit
        if let Some(control) = self.control {
            self.lines.set_level(control.led, !on);
        }
    }

    fn font(&self) -> Result<&FontTable, Error<H::Error>> {
        self.font.as_ref().ok_or(Error::NotInitialized)
    }

    fn require_ready(&self) -> Result<(), Error<H::Error>> {
        if self.state == State::Ready {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}
