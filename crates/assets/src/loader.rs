use crate::decode::{AssetError, DecodedTexture, decode_source};
use crossbeam::channel::{self, Receiver, Sender};
use lagoon_common::{SceneConfig, TextureSlot, TextureSource};
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of one background decode.
#[derive(Debug)]
pub struct LoadEvent {
    pub slot: TextureSlot,
    pub result: Result<DecodedTexture, AssetError>,
}

/// Fire-and-forget texture loader.
///
/// Each request decodes on its own thread and posts a [`LoadEvent`] back.
/// Nothing is joined or cancelled: a decode still running at shutdown just
/// finds the channel closed.
pub struct TextureLoader {
    tx: Sender<LoadEvent>,
    rx: Receiver<LoadEvent>,
    in_flight: usize,
}

impl TextureLoader {
    pub fn new() -> Self {
        let (tx, rx) = channel::unbounded();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn request(&mut self, slot: TextureSlot, source: TextureSource) -> Result<(), AssetError> {
        let tx = self.tx.clone();
        thread::Builder::new()
            .name(format!("decode-{slot}"))
            .spawn(move || {
                let started = Instant::now();
                let result = decode_source(&source);
                tracing::debug!(
                    %slot,
                    ok = result.is_ok(),
                    elapsed = ?started.elapsed(),
                    "texture decode finished"
                );
                let _ = tx.send(LoadEvent { slot, result });
            })
            .map_err(AssetError::Spawn)?;
        self.in_flight += 1;
        Ok(())
    }

    /// Request every texture slot the config describes.
    pub fn request_scene(&mut self, config: &SceneConfig) -> Result<(), AssetError> {
        for slot in TextureSlot::ALL {
            self.request(slot, config.texture_source(slot))?;
        }
        tracing::info!(count = TextureSlot::ALL.len(), "texture decodes requested");
        Ok(())
    }

    /// Drain every finished decode without blocking.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let events: Vec<LoadEvent> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(events.len());
        events
    }

    /// Block for the next finished decode, up to `timeout`.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadEvent> {
        let event = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    /// Requests whose result has not been drained yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self::new()
    }
}
