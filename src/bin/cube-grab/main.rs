use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use hand_cube_grab::drawing::DrawList;
use hand_cube_grab::frame_processing::{handle_landmarks_frame, handle_reset};
use hand_cube_grab::session_config::load_config_from_file;
use hand_cube_grab::systems::Systems;
use hand_cube_grab::wire::{encode_output, FrameOutput, InputMessage, MessageReader, WireFormat};
use log::{debug, error, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment; logs go to stderr, frames to stdout

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    if cli.save_config {
        config.write_config_to_file(&cli.config_path)?;
    }

    let input: Box<dyn BufRead> = match &cli.input_path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open input {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut reader = MessageReader::new(cli.format, input);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut systems = Systems::new(&config);
    let mut canvas = DrawList::new();

    loop {
        let message = match reader.next_message() {
            Ok(Some(message)) => message,
            Ok(None) => break,
            Err(e) => {
                error!("{:#}", e);
                // a bad JSON line can be skipped; a binary stream cannot be resynchronised
                match cli.format {
                    WireFormat::Json => continue,
                    WireFormat::MsgPack => return Err(e),
                }
            }
        };

        match message {
            InputMessage::Landmarks(frame) => {
                let state = handle_landmarks_frame(&frame, &config, &mut systems, &mut canvas);
                let frame_output = FrameOutput {
                    frame: systems.frames_processed,
                    state,
                    mirrored: config.mirror_horizontal,
                    cube: systems.cube_tracker.state(),
                    commands: canvas.take(),
                };
                output
                    .write_all(&encode_output(cli.format, &frame_output)?)
                    .context("failed to write frame output")?;
                output.flush()?;
            }
            InputMessage::Reset => handle_reset(&mut systems),
        }
    }

    info!(
        "Input ended after {} frames; cube at {:?}",
        systems.frames_processed,
        systems.cube_tracker.position()
    );

    Ok(())
}
