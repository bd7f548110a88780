//! Output grid geometry
//!
//! The canvas is the source scaled by `zoom` and tiled by square cells of
//! `thumb_size`, starting at the origin. Cells on the right and bottom edges
//! may be partial.

use crate::io::error::{Result, invalid_parameter};

/// Top-left corner of one grid cell in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Grid row
    pub row: u32,
    /// Canvas x of the left edge
    pub x: u32,
    /// Canvas y of the top edge
    pub y: u32,
}

/// Tiling of a zoomed canvas into fixed-size cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    zoom: u32,
    thumb_size: u32,
}

impl Grid {
    /// Grid for a `source_width` x `source_height` source
    ///
    /// # Errors
    ///
    /// Returns an error if `zoom` or `thumb_size` is zero, or if the zoomed
    /// canvas does not fit in `u32` dimensions
    pub fn new(source_width: u32, source_height: u32, zoom: u32, thumb_size: u32) -> Result<Self> {
        if zoom == 0 {
            return Err(invalid_parameter("zoom", &zoom, &"must be at least 1"));
        }
        if thumb_size == 0 {
            return Err(invalid_parameter(
                "thumb_size",
                &thumb_size,
                &"must be at least 1",
            ));
        }

        let too_large = || {
            invalid_parameter(
                "zoom",
                &zoom,
                &format!("canvas for a {source_width}x{source_height} source would overflow"),
            )
        };
        let width = source_width.checked_mul(zoom).ok_or_else(too_large)?;
        let height = source_height.checked_mul(zoom).ok_or_else(too_large)?;

        Ok(Self {
            width,
            height,
            zoom,
            thumb_size,
        })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cell edge length
    pub const fn thumb_size(&self) -> u32 {
        self.thumb_size
    }

    /// Number of cell columns, counting a partial last column
    pub const fn columns(&self) -> u32 {
        self.width.div_ceil(self.thumb_size)
    }

    /// Number of cell rows, counting a partial last row
    pub const fn rows(&self) -> u32 {
        self.height.div_ceil(self.thumb_size)
    }

    /// Cells in paste order: rows top to bottom, each row left to right
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let step = self.thumb_size as usize;
        (0..self.height)
            .step_by(step)
            .enumerate()
            .flat_map(move |(row, y)| {
                (0..self.width).step_by(step).map(move |x| Cell {
                    row: row as u32,
                    x,
                    y,
                })
            })
    }

    /// Source pixel guiding the cell whose top-left corner is `cell`
    ///
    /// One source sample per `zoom` x `zoom` block, no averaging.
    pub const fn source_position(&self, cell: Cell) -> (u32, u32) {
        (cell.x / self.zoom, cell.y / self.zoom)
    }
}
