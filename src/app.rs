use crate::config::{resolve_plan, Plan};
use crate::render::{FrameRenderer, GifSink, View};
use crate::schedule::frame_times;
use crate::system::Orrery;
use crate::Args;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};
use tracing::{debug, info};

pub(crate) fn run(args: Args) -> Result<()> {
    let started = Instant::now();
    let plan = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        resolve_plan(&args, &mut input, &mut out)?
    };
    info!(
        central = plan.system.central().name,
        bodies = plan.system.bodies().len(),
        days = plan.duration_days,
        frames = plan.frames,
        output = %plan.output.display(),
        "rendering"
    );

    let file = File::create(&plan.output).with_context(|| format!("creating {}", plan.output.display()))?;
    let written = write_gif(&plan, BufWriter::new(file))?;

    let secs = started.elapsed().as_secs_f64();
    info!(frames = written, seconds = secs, "done");
    println!("Wrote {} ({} frames) in {:.2} seconds", plan.output.display(), written, secs);
    Ok(())
}

/// Encode the whole animation into `w`, then flush so late write errors surface.
pub(crate) fn write_gif<W: Write>(plan: &Plan, mut w: W) -> Result<usize> {
    let mut sink = GifSink::new(&mut w, plan.settings.fps, plan.settings.speed)?;
    let written = animate(plan, &mut sink)?;
    // dropping the encoder emits the GIF trailer
    drop(sink);
    w.flush().with_context(|| format!("writing {}", plan.output.display()))?;
    Ok(written)
}

/// Step the system once per scheduled time and hand each frame to `sink`, in order.
pub(crate) fn animate<W: Write>(plan: &Plan, sink: &mut GifSink<W>) -> Result<usize> {
    let times = frame_times(plan.duration_days, plan.frames);
    let mut orrery = Orrery::new(&plan.system, times.len());
    let mut renderer = FrameRenderer::new(View::new(plan.view_radius, plan.settings.size), &plan.settings);

    let report_every = (times.len() / 10).max(1);
    for (i, t) in times.iter().enumerate() {
        let snap = orrery.step(*t);
        sink.push(renderer.render(&orrery, &snap))?;
        if (i + 1) % report_every == 0 {
            debug!(frame = i + 1, of = times.len(), days = snap.days, "progress");
        }
    }
    Ok(sink.frames())
}
