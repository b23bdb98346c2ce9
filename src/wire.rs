use std::io::{self, BufRead};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    drawing::DrawCommand,
    landmarks::LandmarkFrame,
    systems::{cube_tracker::CubeState, grab_detection::GrabState},
};

/// Messages accepted by the agent, one per frame or command
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputMessage {
    /// Hand detector results for one video frame
    Landmarks(LandmarkFrame),
    /// Put the cube back to its reset pose
    Reset,
}

/// Everything a renderer needs to paint one frame of the overlay
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub frame: u64,
    pub state: GrabState,
    pub mirrored: bool,
    pub cube: CubeState,
    pub commands: Vec<DrawCommand>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// One JSON document per line
    Json,
    /// Concatenated MessagePack values
    #[value(name = "msgpack")]
    MsgPack,
}

pub fn encode_output(format: WireFormat, output: &FrameOutput) -> Result<Vec<u8>> {
    match format {
        WireFormat::Json => {
            let mut bytes = serde_json::to_vec(output)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        WireFormat::MsgPack => {
            rmp_serde::to_vec_named(output).context("failed to encode frame output")
        }
    }
}

/// Reads [`InputMessage`]s one at a time from a stream
pub struct MessageReader<R: BufRead> {
    format: WireFormat,
    reader: R,
    line: String,
}

impl<R: BufRead> MessageReader<R> {
    pub fn new(format: WireFormat, reader: R) -> Self {
        MessageReader {
            format,
            reader,
            line: String::new(),
        }
    }

    /// The next message, or `None` once the stream has ended cleanly
    pub fn next_message(&mut self) -> Result<Option<InputMessage>> {
        match self.format {
            WireFormat::Json => self.next_json(),
            WireFormat::MsgPack => self.next_msgpack(),
        }
    }

    fn next_json(&mut self) -> Result<Option<InputMessage>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text)
                .map(Some)
                .map_err(|e| anyhow!("Failed to parse input message: {}", e));
        }
    }

    fn next_msgpack(&mut self) -> Result<Option<InputMessage>> {
        if self.reader.fill_buf()?.is_empty() {
            return Ok(None);
        }
        match rmp_serde::from_read(&mut self.reader) {
            Ok(message) => Ok(Some(message)),
            Err(rmp_serde::decode::Error::InvalidMarkerRead(e))
                if e.kind() == io::ErrorKind::UnexpectedEof =>
            {
                Ok(None)
            }
            Err(e) => Err(anyhow!("Failed to decode input message: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{HandSnapshot, Landmark};

    fn landmarks_message() -> InputMessage {
        let mut frame = LandmarkFrame::new(Some(vec![HandSnapshot::new(vec![
            Landmark::new(0.25, 0.5, 0.);
            21
        ])]));
        frame.width = Some(640.);
        frame.height = Some(480.);
        InputMessage::Landmarks(frame)
    }

    #[test]
    fn test_json_lines_skip_blanks() {
        let text = r#"{"type":"landmarks","hands":[]}

{"type":"reset"}
"#;
        let mut reader = MessageReader::new(WireFormat::Json, text.as_bytes());
        assert_eq!(
            reader.next_message().unwrap(),
            Some(InputMessage::Landmarks(LandmarkFrame::new(Some(Vec::new()))))
        );
        assert_eq!(reader.next_message().unwrap(), Some(InputMessage::Reset));
        assert_eq!(reader.next_message().unwrap(), None);
    }

    #[test]
    fn test_json_malformed_line_is_an_error() {
        let mut reader = MessageReader::new(WireFormat::Json, "{\"type\":\"wave\"}\n".as_bytes());
        assert!(reader.next_message().is_err());
    }

    #[test]
    fn test_msgpack_stream() {
        let mut bytes = rmp_serde::to_vec_named(&landmarks_message()).unwrap();
        bytes.extend(rmp_serde::to_vec_named(&InputMessage::Reset).unwrap());

        let mut reader = MessageReader::new(WireFormat::MsgPack, bytes.as_slice());
        assert_eq!(reader.next_message().unwrap(), Some(landmarks_message()));
        assert_eq!(reader.next_message().unwrap(), Some(InputMessage::Reset));
        assert_eq!(reader.next_message().unwrap(), None);
    }

    #[test]
    fn test_json_output_is_one_line() {
        let config = crate::session_config::SessionConfig::default();
        let tracker = crate::systems::cube_tracker::CubeTracker::new(&config);
        let output = FrameOutput {
            frame: 7,
            state: GrabState::Grabbing,
            mirrored: true,
            cube: tracker.state(),
            commands: Vec::new(),
        };
        let bytes = encode_output(WireFormat::Json, &output).unwrap();
        assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 1);
        let decoded: FrameOutput = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, output);

        let bytes = encode_output(WireFormat::MsgPack, &output).unwrap();
        let decoded: FrameOutput = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, output);
    }
}
