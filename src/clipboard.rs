use crate::errors::ClipboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    NotRequested,
    Disabled,
    Copy,
}

/// Decides what to do with `--clip` given the `CLIP_ALLOWED` setting.
pub fn request_copy(allowed: bool, requested: bool) -> ClipboardOutcome {
    match (requested, allowed) {
        (false, _) => ClipboardOutcome::NotRequested,
        (true, false) => ClipboardOutcome::Disabled,
        (true, true) => ClipboardOutcome::Copy,
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut ctx = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;

    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    tracing::debug!("password written to clipboard");
    Ok(())
}
