//! Frame driver
//!
//! Owns everything between the clock and the LED strip: the playlist, the
//! pixel buffer, the filters and the output driver. Frame pacing is
//! portable; the caller sleeps for the returned duration between ticks.

use embassy_time::{Duration, Instant};
use rand::{SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb},
    effect::{Effect, FrameContext, TestPatternEffect},
    error::{BufferBoundsError, ConfigurationError},
    filter::FilterProcessor,
    fixture::FixtureConfig,
    painter::RegionPainter,
    periodic::Periodic,
    scheduler::PatternScheduler,
};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Renders one fixture frame by frame.
///
/// Each tick:
/// - renders the startup test pattern, or the current effect of the playlist
/// - filters the pixel buffer into the output frame and writes it once
/// - shifts the base hue and advances the playlist when their timers fire
///
/// # Usage
///
/// ```ignore
/// let scheduler = deltohedron::playlist()?;
/// let mut driver: FrameDriver<_, { deltohedron::LED_COUNT }> =
///     FrameDriver::new(&deltohedron::CONFIG, scheduler, strip, seed)?;
///
/// loop {
///     let result = driver.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameDriver<O: OutputDriver, const LEDS: usize> {
    output: O,
    painter: RegionPainter,
    scheduler: PatternScheduler,
    filters: FilterProcessor,
    pixels: [Rgb; LEDS],
    frame: [Rgb; LEDS],
    rng: SmallRng,
    hue_timer: Periodic,
    pattern_timer: Periodic,
    startup: Option<TestPatternEffect>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const LEDS: usize> FrameDriver<O, LEDS> {
    /// Validate the fixture and every effect of the playlist, then hand the
    /// strip to the output driver.
    ///
    /// `LEDS` must match the fixture's LED count.
    pub fn new(
        fixture: &FixtureConfig,
        scheduler: PatternScheduler,
        mut output: O,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        fixture.validate()?;
        scheduler.validate(fixture.layout)?;
        let led_count = fixture.layout.led_count();
        if led_count != LEDS {
            return Err(ConfigurationError::BufferLength {
                expected: led_count,
                actual: LEDS,
            });
        }

        let light = &fixture.light;
        output.configure(LEDS, light.data_pin);

        #[cfg(feature = "esp32-log")]
        println!(
            "{} v{}: {} LEDs on pin {}, {} patterns, {} s each",
            fixture.name,
            env!("CARGO_PKG_VERSION"),
            LEDS,
            light.data_pin,
            scheduler.len(),
            light.pattern_interval.as_secs()
        );

        Ok(Self {
            output,
            painter: RegionPainter::new(fixture.layout),
            scheduler,
            filters: FilterProcessor::new(&light.filters()),
            pixels: [BLACK; LEDS],
            frame: [BLACK; LEDS],
            rng: SmallRng::seed_from_u64(seed),
            hue_timer: Periodic::new(light.hue_interval),
            pattern_timer: Periodic::new(light.pattern_interval),
            startup: light.startup_test_step.map(TestPatternEffect::new),
            next_frame: Instant::from_millis(0),
            frame_duration: light.frame_duration(),
        })
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.render(now);
        self.filters.process(&self.pixels, &mut self.frame);
        self.output.write(&self.frame);

        if self.startup.is_none() {
            self.update_timers(now);
        }

        self.next_frame += self.frame_duration;
        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    fn render(&mut self, now: Instant) {
        if self
            .startup
            .as_ref()
            .is_some_and(|pattern| pattern.is_finished(now))
        {
            self.startup = None;
            self.pixels.fill(BLACK);
            #[cfg(feature = "esp32-log")]
            println!("[{}] startup test finished", now.as_millis());
        }

        let mut frame = FrameContext {
            now,
            hue: self.scheduler.hue(),
            leds: &mut self.pixels,
            painter: self.painter,
            rng: &mut self.rng,
        };
        let result = match self.startup.as_mut() {
            Some(pattern) => pattern.render(&mut frame),
            None => self.scheduler.current_effect_mut().render(&mut frame),
        };
        if let Err(err) = result {
            report_render_error(err);
        }
    }

    fn update_timers(&mut self, now: Instant) {
        if self.hue_timer.ready(now) {
            self.scheduler.shift_hue();
        }
        if self.pattern_timer.ready(now) {
            self.scheduler.advance();
            #[cfg(feature = "esp32-log")]
            println!(
                "[{}] changing pattern to {} ({})",
                now.as_millis(),
                self.scheduler.index(),
                self.scheduler.current_effect().id().as_str()
            );
        }
    }

    /// Unfiltered pixel buffer as the effects left it
    pub const fn pixels(&self) -> &[Rgb; LEDS] {
        &self.pixels
    }

    /// Last frame written to the output driver
    pub const fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }

    pub const fn scheduler(&self) -> &PatternScheduler {
        &self.scheduler
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn is_starting_up(&self) -> bool {
        self.startup.is_some()
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.filters.brightness.set(brightness);
    }
}

fn report_render_error(err: BufferBoundsError) {
    if cfg!(debug_assertions) {
        panic!("render wrote outside the pixel buffer: {err}");
    }
    #[cfg(feature = "esp32-log")]
    println!("render error: {err}");
}
