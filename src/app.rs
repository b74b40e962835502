use crate::cli::Args;
use crate::cup;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::io::{self, Write};
use std::time::Duration;
use steam::{driver, LoopOptions, ParticleSystem, StopToken, Steam, SystemClock};

pub(crate) fn run(args: Args) -> Result<()> {
    // validate before touching the terminal so the error stays readable
    let mut system = build_system(&args)?;
    system.start();

    let opts = LoopOptions {
        tick: Duration::from_millis(args.tick_ms.max(1)),
        max_frames: args.frames,
    };
    let stop = StopToken::new();
    let show_cup = !args.no_cup;

    let mut out = io::stdout();
    if args.plain {
        driver::run(&mut system, opts, &stop, |frame| {
            draw_plain(&mut out, frame, show_cup)
        })?;
        return Ok(());
    }

    in_screen(&mut out, enter_screen, cleanup, |out| {
        driver::run(&mut system, opts, &stop, |frame| {
            if quit_requested()? {
                stop.cancel();
                return Ok(());
            }
            draw(out, frame, show_cup)
        })
    })?;
    Ok(())
}

/// Run `body` between `enter` and `leave`. `leave` runs whenever `enter` was
/// attempted, even if `enter` failed halfway; the first error wins.
fn in_screen<W, T>(
    out: &mut W,
    enter: impl FnOnce(&mut W) -> Result<()>,
    leave: impl FnOnce(&mut W) -> Result<()>,
    body: impl FnOnce(&mut W) -> Result<T>,
) -> Result<T> {
    let res = enter(out).and_then(|()| body(out));
    let left = leave(out);
    let value = res?;
    left?;
    Ok(value)
}

fn build_system(args: &Args) -> Result<ParticleSystem<Steam>> {
    let rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };
    let effect = Steam {
        declump: args.declump,
    };
    ParticleSystem::new(args.params(), effect, rng, Box::new(SystemClock::new()))
        .context("invalid steam configuration")
}

fn quit_requested() -> Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press {
                continue;
            }
            match k.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
    Ok(false)
}

fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)?;
    terminal::enable_raw_mode()?;
    Ok(())
}

fn draw<W: Write>(out: &mut W, frame: &str, show_cup: bool) -> Result<()> {
    queue!(out, BeginSynchronizedUpdate, Clear(ClearType::All))?;
    let mut y = 0u16;
    for line in frame.lines() {
        queue!(out, cursor::MoveTo(0, y), Print(line))?;
        y = y.saturating_add(1);
    }
    if show_cup {
        for line in cup::lines() {
            queue!(out, cursor::MoveTo(0, y), Print(line))?;
            y = y.saturating_add(1);
        }
    }
    queue!(out, EndSynchronizedUpdate)?;
    out.flush()?;
    Ok(())
}

fn draw_plain(out: &mut io::Stdout, frame: &str, show_cup: bool) -> Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0), Print(frame))?;
    if show_cup {
        queue!(out, Print(cup::CUP))?;
    }
    queue!(out, Print('\n'))?;
    out.flush()?;
    Ok(())
}

fn cleanup<W: Write>(out: &mut W) -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        out,
        ResetColor,
        EnableLineWrap,
        cursor::Show,
        LeaveAlternateScreen
    )?;
    Ok(())
}
