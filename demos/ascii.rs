//! Terminal demo: renders the bars as characters and feeds a tap every few seconds.
//!
//! Taps arrive on a separate thread and travel through a channel, so all
//! renderer state is touched from the main loop only.

use bar_sequencer::{
    AnimationConfig, BarRect, BarRenderer, FrameTiming, InputEvent, RedrawScheduler, Srgb, Surface,
};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const COLS: usize = 48;
const ROWS: usize = 20;

struct AsciiSurface {
    cells: [[char; COLS]; ROWS],
    palette: Vec<Srgb>,
}

impl AsciiSurface {
    fn glyph(&self, color: Srgb) -> char {
        const GLYPHS: [char; 8] = ['#', '@', '%', '*', '+', '=', 'o', 'x'];
        self.palette
            .iter()
            .position(|c| *c == color)
            .map_or('?', |i| GLYPHS[i % GLYPHS.len()])
    }

    fn print(&self) {
        let mut out = String::with_capacity((COLS + 1) * ROWS + 8);
        out.push_str("\x1b[H");
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        print!("{}", out);
    }
}

impl Surface for AsciiSurface {
    fn width(&self) -> f32 {
        COLS as f32
    }

    fn height(&self) -> f32 {
        ROWS as f32
    }

    fn fill_background(&mut self, _color: Srgb) {
        self.cells = [['.'; COLS]; ROWS];
    }

    fn fill_rect(&mut self, rect: BarRect, color: Srgb) {
        let glyph = self.glyph(color);
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = ((rect.x + rect.width).ceil().max(0.0) as usize).min(COLS);
        let y1 = ((rect.y + rect.height).ceil().max(0.0) as usize).min(ROWS);
        for row in self.cells.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1).skip(x0) {
                *cell = glyph;
            }
        }
    }
}

/// Remembers when the next frame is due.
struct LoopScheduler {
    next_frame: Option<Instant>,
}

impl RedrawScheduler<Duration> for LoopScheduler {
    fn request_redraw(&mut self) {
        self.next_frame = Some(Instant::now());
    }

    fn request_redraw_after(&mut self, delay: Duration) {
        self.next_frame = Some(Instant::now() + delay);
    }
}

fn main() {
    let config = AnimationConfig::<Duration>::default();
    let mut surface = AsciiSurface {
        cells: [['.'; COLS]; ROWS],
        palette: config.palette().iter().copied().collect(),
    };
    let mut renderer = BarRenderer::new(config);
    let mut scheduler = LoopScheduler { next_frame: None };

    let (taps, inbox) = mpsc::channel();
    thread::spawn(move || {
        loop {
            if taps.send(InputEvent::PointerDown).is_err() {
                break;
            }
            thread::sleep(Duration::from_secs(6));
        }
    });

    print!("\x1b[2J");
    renderer.render_frame(&mut surface, &mut scheduler);
    surface.print();

    loop {
        while let Ok(event) = inbox.try_recv() {
            renderer.handle_event(event, &mut scheduler);
        }

        match scheduler.next_frame.take() {
            Some(due) => {
                let now = Instant::now();
                if due > now {
                    thread::sleep(due - now);
                }
                if renderer.render_frame(&mut surface, &mut scheduler) == FrameTiming::Settled {
                    println!("active color: {}   ", renderer.active_index());
                }
                surface.print();
            }
            None => thread::sleep(Duration::from_millis(10)),
        }
    }
}
