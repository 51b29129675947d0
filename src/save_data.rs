use log::{info, warn};
use std::{fs, io, path::Path};

pub const TOTAL_SLOTS: usize = 10;

/// Ten integers stored as little endian `i32`s, rewritten whole on save.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveSlots {
    values: [i32; TOTAL_SLOTS],
}

impl SaveSlots {
    pub fn from_bytes(bytes: &[u8]) -> io::Result<SaveSlots> {
        let needed = TOTAL_SLOTS * 4;
        if bytes.len() < needed {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("save file has {} of {} bytes", bytes.len(), needed),
            ));
        }

        let mut values = [0; TOTAL_SLOTS];
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
            *value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(SaveSlots { values })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    /// Reads the slots, or writes a zeroed file when none exists yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> io::Result<SaveSlots> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => SaveSlots::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("No save file at {}, creating one", path.display());
                let slots = SaveSlots::default();
                slots.save(path)?;
                Ok(slots)
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_bytes())?;
        info!("Saved {} slots to {}", TOTAL_SLOTS, path.display());
        Ok(())
    }

    pub fn values(&self) -> &[i32; TOTAL_SLOTS] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: i32) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn adjust(&mut self, index: usize, delta: i32) -> Option<i32> {
        let slot = self.values.get_mut(index)?;
        *slot = slot.wrapping_add(delta);
        Some(*slot)
    }
}
