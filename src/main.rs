//! Firmware entry point: wires the task loops to STM32F405 hardware.
//!
//! Switches come in on GPIO with pull-downs, the three indicator lamps are
//! GPIO outputs, and the two-row display is a serial terminal on USART3.
//! The library is target-independent; only this file touches the HAL, so
//! host builds get a stub `main` and everything else is exercised through
//! `cargo test`.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod firmware {
    use embassy_executor::Spawner;
    use embassy_stm32::gpio::{AnyPin, Input, Level, Output, Pin, Pull, Speed};
    use embassy_stm32::peripherals::{DMA1_CH3, USART3};
    use embassy_stm32::rcc::*;
    use embassy_stm32::time::Hertz as TimeHertz;
    use embassy_stm32::usart::{Config as UsartConfig, Uart, UartTx};
    use embassy_stm32::{bind_interrupts, peripherals, Config};
    use embassy_time::{Duration, Timer};
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use car_simulator::config::SimConfig;
    use car_simulator::io::{Indicator, InputBank, InputChannel, TextDisplay};
    use car_simulator::state::SharedState;
    use car_simulator::tasks;

    // ── Shared state and configuration ────────────────────────────────────────
    static SHARED: SharedState = SharedState::new();
    const CONFIG: SimConfig = SimConfig::DEFAULT;

    // ── Interrupt bindings ────────────────────────────────────────────────────
    bind_interrupts!(struct Irqs {
        USART3 => embassy_stm32::usart::InterruptHandler<peripherals::USART3>;
    });

    // ── Hardware adapters ─────────────────────────────────────────────────────

    /// The four simulator switches. Reads are plain GPIO level samples, so
    /// the bank is shared by reference between the sampler and the cruise
    /// task; the input-domain lock already serializes every access.
    pub struct SwitchBank {
        engine: Input<'static, AnyPin>,
        accel: Input<'static, AnyPin>,
        brakes: Input<'static, AnyPin>,
        cruise: Input<'static, AnyPin>,
    }

    impl InputBank for &'static SwitchBank {
        fn read_bit(&mut self, channel: InputChannel) -> bool {
            match channel {
                InputChannel::Engine => self.engine.is_high(),
                InputChannel::Accel => self.accel.is_high(),
                InputChannel::Brakes => self.brakes.is_high(),
                InputChannel::Cruise => self.cruise.is_high(),
            }
        }
    }

    /// One indicator lamp on a GPIO output.
    pub struct Lamp(Output<'static, AnyPin>);

    impl Indicator for Lamp {
        fn set(&mut self, on: bool) {
            self.0.set_level(if on { Level::High } else { Level::Low });
        }
    }

    /// Two-row text sink on USART3. Each row is sent as its own terminated
    /// line; writes block, but a 16-character row at 115200 baud is well
    /// under the 500 ms publisher period.
    pub struct SerialPanel {
        tx: UartTx<'static, USART3, DMA1_CH3>,
    }

    impl TextDisplay for SerialPanel {
        fn write_line(&mut self, row: u8, text: &str) {
            if row == 0 {
                let _ = self.tx.blocking_write(b"\r\n");
            }
            let _ = self.tx.blocking_write(text.as_bytes());
            let _ = self.tx.blocking_write(b"\r\n");
        }
    }

    // ── Task wrappers (concrete types for the executor) ───────────────────────

    #[embassy_executor::task]
    async fn input_task(bank: &'static SwitchBank, ignition_lamp: Lamp) {
        tasks::input_sampler(&SHARED, CONFIG, bank, ignition_lamp).await
    }

    #[embassy_executor::task]
    async fn cruise_task(bank: &'static SwitchBank, cruise_lamp: Lamp) {
        tasks::cruise_controller(&SHARED, CONFIG, bank, cruise_lamp).await
    }

    #[embassy_executor::task]
    async fn physics_task() {
        tasks::physics_integrator(&SHARED, CONFIG).await
    }

    #[embassy_executor::task]
    async fn averager_task(speeding_lamp: Lamp) {
        tasks::speed_averager(&SHARED, CONFIG, speeding_lamp).await
    }

    #[embassy_executor::task]
    async fn display_task(panel: SerialPanel) {
        tasks::display_publisher(&SHARED, CONFIG, panel).await
    }

    // ── Main ──────────────────────────────────────────────────────────────────

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        // 1. Clocks (168 MHz PLL from the 8 MHz quartz)
        let mut config = Config::default();
        config.rcc.hse = Some(Hse {
            freq: TimeHertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL168,
            divp: Some(PllPDiv::DIV2), // 168 MHz
            divq: Some(PllQDiv::DIV7),
            divr: None,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV4;
        config.rcc.apb2_pre = APBPrescaler::DIV2;
        let p = embassy_stm32::init(config);

        // 2. Switch bank on PC0..PC3 (pull-downs, switch closes to 3V3)
        static BANK: StaticCell<SwitchBank> = StaticCell::new();
        let bank: &'static SwitchBank = BANK.init(SwitchBank {
            engine: Input::new(p.PC0.degrade(), Pull::Down),
            accel: Input::new(p.PC1.degrade(), Pull::Down),
            brakes: Input::new(p.PC2.degrade(), Pull::Down),
            cruise: Input::new(p.PC3.degrade(), Pull::Down),
        });

        // 3. Indicator lamps
        let ignition_lamp = Lamp(Output::new(p.PB13.degrade(), Level::Low, Speed::Low));
        let cruise_lamp = Lamp(Output::new(p.PB14.degrade(), Level::Low, Speed::Low));
        let speeding_lamp = Lamp(Output::new(p.PB15.degrade(), Level::Low, Speed::Low));

        // 4. Display on USART3 @ 115200 (TX=PB10, RX=PB11 unused)
        let mut usart_config = UsartConfig::default();
        usart_config.baudrate = 115_200;
        let uart = Uart::new(
            p.USART3, p.PB11, p.PB10,
            Irqs,
            p.DMA1_CH3, p.DMA1_CH1,
            usart_config,
        )
        .unwrap();
        let (uart_tx, _uart_rx) = uart.split();
        let panel = SerialPanel { tx: uart_tx };

        // 5. Spawn the five periodic tasks
        spawner.spawn(input_task(bank, ignition_lamp)).unwrap();
        spawner.spawn(cruise_task(bank, cruise_lamp)).unwrap();
        spawner.spawn(physics_task()).unwrap();
        spawner.spawn(averager_task(speeding_lamp)).unwrap();
        spawner.spawn(display_task(panel)).unwrap();

        defmt::info!("vehicle simulator running");

        // 6. Main task: heartbeat LED @ 1 Hz
        let mut led = Output::new(p.PC13, Level::High, Speed::Low);
        loop {
            led.toggle();
            Timer::after(Duration::from_millis(500)).await;
        }
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {
    // The simulator only runs on the ARM target; host builds of this
    // package exist for the library tests.
}
