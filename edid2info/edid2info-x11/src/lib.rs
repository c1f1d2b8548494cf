//! X11 RandR output source.
//!
//! Serves the [`OutputSource`] capability over an `x11rb` connection:
//! output enumeration from the current screen resources, EDID bytes
//! from the `EDID` output property, geometry and power state from the
//! output's CRTC.

use std::sync::Arc;

use bytes::Bytes;
use edid2info_core::{Geometry, OutputSource, PowerStatus, SourceError};
use x11rb::connection::Connection as _;
use x11rb::protocol::randr::{
    Connection, ConnectionExt as RandrConnectionExt, GetCrtcInfoReply, GetOutputInfoReply,
    GetScreenResourcesCurrentReply, ModeInfo, Output,
};
use x11rb::protocol::xproto::{Atom, ConnectionExt as XprotoConnectionExt};
use x11rb::rust_connection::RustConnection;

/// Shared connection state behind every [`X11Output`] of one scan.
struct Backend {
    conn: RustConnection,
    edid_atom: Atom,
    resources: GetScreenResourcesCurrentReply,
}

/// All RandR outputs currently reporting a connected monitor.
pub fn connected_outputs() -> Result<Vec<X11Output>, SourceError> {
    let (conn, screen_num) = RustConnection::connect(None).map_err(platform)?;
    let root = conn.setup().roots[screen_num].root;
    conn.randr_query_version(1, 5)
        .map_err(platform)?
        .reply()
        .map_err(platform)?;
    let resources = conn
        .randr_get_screen_resources_current(root)
        .map_err(platform)?
        .reply()
        .map_err(platform)?;
    let edid_atom = conn
        .intern_atom(false, b"EDID")
        .map_err(platform)?
        .reply()
        .map_err(platform)?
        .atom;

    let backend = Arc::new(Backend {
        conn,
        edid_atom,
        resources,
    });
    let mut outputs = Vec::new();
    for &output in &backend.resources.outputs {
        let info = backend
            .conn
            .randr_get_output_info(output, backend.resources.config_timestamp)
            .map_err(platform)?
            .reply()
            .map_err(platform)?;
        if info.connection != Connection::CONNECTED {
            continue;
        }
        outputs.push(X11Output {
            backend: Arc::clone(&backend),
            output,
            info,
        });
    }
    Ok(outputs)
}

/// One connected RandR output.
pub struct X11Output {
    backend: Arc<Backend>,
    output: Output,
    info: GetOutputInfoReply,
}

impl X11Output {
    fn no_data(&self, detail: impl Into<String>) -> SourceError {
        SourceError::NoData {
            output: String::from_utf8_lossy(&self.info.name).to_string(),
            detail: detail.into(),
        }
    }

    /// CRTC info for this output, `None` when no CRTC drives it.
    fn crtc(&self) -> Result<Option<GetCrtcInfoReply>, SourceError> {
        if self.info.crtc == 0 {
            return Ok(None);
        }
        let reply = self
            .backend
            .conn
            .randr_get_crtc_info(self.info.crtc, self.backend.resources.config_timestamp)
            .map_err(platform)?
            .reply()
            .map_err(platform)?;
        Ok(Some(reply))
    }
}

impl OutputSource for X11Output {
    fn edid(&self) -> Result<Bytes, SourceError> {
        let prop = self
            .backend
            .conn
            .randr_get_output_property(
                self.output,
                self.backend.edid_atom,
                x11rb::NONE,
                0,
                u32::MAX,
                false,
                false,
            )
            .map_err(platform)?
            .reply()
            .map_err(platform)?;
        if prop.format != 8 || prop.data.is_empty() {
            return Err(self.no_data("output advertises no EDID property"));
        }
        Ok(Bytes::from(prop.data))
    }

    fn output_name(&self) -> Result<String, SourceError> {
        Ok(String::from_utf8_lossy(&self.info.name).to_string())
    }

    fn resolution(&self) -> Result<(u32, u32), SourceError> {
        // active CRTC mode first, then the output's preferred mode
        if let Some(crtc) = self.crtc()?
            && let Some(size) = mode_size(&self.backend.resources.modes, crtc.mode)
        {
            return Ok(size);
        }
        self.info
            .modes
            .first()
            .and_then(|&mode| mode_size(&self.backend.resources.modes, mode))
            .ok_or_else(|| self.no_data("no usable mode"))
    }

    fn geometry(&self) -> Result<Geometry, SourceError> {
        match self.crtc()? {
            Some(crtc) => Ok(Geometry {
                x: crtc.x,
                y: crtc.y,
                width: crtc.width,
                height: crtc.height,
            }),
            None => Err(self.no_data("no active crtc")),
        }
    }

    fn status(&self) -> Result<PowerStatus, SourceError> {
        Ok(if self.info.crtc == 0 {
            PowerStatus::Off
        } else {
            PowerStatus::On
        })
    }
}

fn platform<E>(e: E) -> SourceError
where
    E: std::error::Error + Send + Sync + 'static,
{
    SourceError::Platform {
        source: Box::new(e),
    }
}

/// Pixel size of the mode with `id`, if the server reported it.
fn mode_size(modes: &[ModeInfo], id: u32) -> Option<(u32, u32)> {
    modes
        .iter()
        .find(|m| m.id == id)
        .map(|m| (u32::from(m.width), u32::from(m.height)))
}
