//! Board bring-up
//!
//! Pin assignment is board-specific (Raspberry Pi Pico on the joystick
//! carrier). embassy-rp pins are types, so the assignment lives in code; the
//! GPIO numbers below document it and are checked against the RP2040 mux
//! rules before any peripheral is touched.

use defmt::*;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::Peripherals;

use kinesis_core::config::{ConfigError, DeviceConfig};
use kinesis_core::input::{AnalogSampler, SamplerError};
use kinesis_display::{FlushError, GraphicsSink, SizeMismatch};
use kinesis_hal::EhOutput;
use kinesis_hal_rp2040::{AdcChannel, JoystickAdc, LedSlice, PwmOutput};

use crate::display::Oled;

/// Joystick X axis (ADC0)
pub const JOYSTICK_X_GPIO: u8 = 26;
/// Joystick Y axis (ADC1)
pub const JOYSTICK_Y_GPIO: u8 = 27;
/// Joystick push (select button)
pub const SELECT_BUTTON_GPIO: u8 = 22;
/// Button A (power button)
pub const POWER_BUTTON_GPIO: u8 = 5;
/// Green indicator LED
pub const INDICATOR_LED_GPIO: u8 = 11;
/// Blue LED, driven by the X axis
pub const LED_A_GPIO: u8 = 12;
/// Red LED, driven by the Y axis
pub const LED_B_GPIO: u8 = 13;
/// OLED data line (I2C1 SDA)
pub const I2C_SDA_GPIO: u8 = 14;
/// OLED clock line (I2C1 SCL)
pub const I2C_SCL_GPIO: u8 = 15;
/// OLED bus frequency
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Bring-up failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum InitError {
    /// Embedded configuration failed to decode or validate
    Config(ConfigError),
    /// Pin constants disagree with the RP2040 mux
    PinMap,
    /// OLED did not answer on I2C
    Display(FlushError),
    /// Panel is not the size `device.toml` describes
    DisplaySize(SizeMismatch),
    /// ADC conversion failed during the probe
    Adc,
    /// ADC answered with an impossible value
    Sampler(SamplerError),
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl From<FlushError> for InitError {
    fn from(e: FlushError) -> Self {
        InitError::Display(e)
    }
}

impl From<SizeMismatch> for InitError {
    fn from(e: SizeMismatch) -> Self {
        InitError::DisplaySize(e)
    }
}

impl From<adc::Error> for InitError {
    fn from(_: adc::Error) -> Self {
        InitError::Adc
    }
}

impl From<SamplerError> for InitError {
    fn from(e: SamplerError) -> Self {
        InitError::Sampler(e)
    }
}

/// Indicator LED behind the select button
pub type Indicator = EhOutput<Output<'static>>;

/// Everything the tasks need, ready to run
pub struct Board {
    pub sampler: AnalogSampler<JoystickAdc>,
    pub leds: LedSlice,
    pub display: GraphicsSink<Oled>,
    pub power_button: Input<'static>,
    pub select_button: Input<'static>,
    pub indicator: Indicator,
}

/// Check the pin constants against the RP2040 ADC and PWM mux
fn check_pin_map() -> Result<(), InitError> {
    let adc_ok = AdcChannel::from_gpio(JOYSTICK_X_GPIO) == Some(AdcChannel::Adc0)
        && AdcChannel::from_gpio(JOYSTICK_Y_GPIO) == Some(AdcChannel::Adc1);

    // LedSlice takes PWM_SLICE6
    let pwm_ok = PwmOutput::is_pair(LED_A_GPIO, LED_B_GPIO)
        && PwmOutput::from_gpio(LED_A_GPIO).map(|o| o.slice) == Some(6);

    if adc_ok && pwm_ok {
        Ok(())
    } else {
        Err(InitError::PinMap)
    }
}

/// Bring up every peripheral
///
/// Display first, so a missing OLED is reported before anything else runs.
pub fn init(p: Peripherals, config: &DeviceConfig) -> Result<Board, InitError> {
    check_pin_map()?;

    debug!(
        "Pins: joystick x={} y={}, buttons power={} select={}, leds {}/{}, indicator {}, i2c sda={} scl={}",
        JOYSTICK_X_GPIO,
        JOYSTICK_Y_GPIO,
        POWER_BUTTON_GPIO,
        SELECT_BUTTON_GPIO,
        LED_A_GPIO,
        LED_B_GPIO,
        INDICATOR_LED_GPIO,
        I2C_SDA_GPIO,
        I2C_SCL_GPIO
    );

    // I2C1: SCL=GPIO15, SDA=GPIO14
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = Oled::new(i2c, config.display.address)?;
    let display = GraphicsSink::for_display(oled, &config.display)?;
    info!(
        "OLED ready at {=u8:#x} ({}x{})",
        config.display.address, config.display.width, config.display.height
    );

    // Joystick: X=GPIO26 (ADC0), Y=GPIO27 (ADC1)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let x = Channel::new_pin(p.PIN_26, Pull::None);
    let y = Channel::new_pin(p.PIN_27, Pull::None);
    let sampler = AnalogSampler::new(JoystickAdc::new(adc, x, y)?).probe()?;
    info!("Joystick ADC ready");

    // LEDs: GPIO12 (slice 6 A), GPIO13 (slice 6 B)
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm::Config::default());
    let leds = LedSlice::new(pwm, config.pwm.wrap, config.pwm.clk_div_x16);
    info!(
        "LED PWM ready: wrap={} div={}+{}/16",
        config.pwm.wrap,
        config.pwm.clk_div_int(),
        config.pwm.clk_div_frac()
    );

    // Buttons pull low when pressed
    let power_button = Input::new(p.PIN_5, Pull::Up);
    let select_button = Input::new(p.PIN_22, Pull::Up);
    let indicator = EhOutput::new(Output::new(p.PIN_11, Level::Low), false);

    Ok(Board {
        sampler,
        leds,
        display,
        power_button,
        select_button,
        indicator,
    })
}
