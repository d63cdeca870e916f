use crate::cell::Cell;
use crate::diagram::VoronoiDiagram;
use crate::point::Point;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_NEIGHBOR: &'static str = r#"
export const NO_NEIGHBOR = -1;
"#;

// --- Cell Wrapper ---

#[wasm_bindgen(js_name = Cell)]
pub struct CellWasm {
    inner: Cell,
}

#[wasm_bindgen(js_class = Cell)]
impl CellWasm {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> usize { self.inner.id() }

    #[wasm_bindgen(getter)]
    pub fn generator(&self) -> Vec<f64> { self.inner.generator().to_array().to_vec() }

    /// Flat border segments `[sx, sy, ex, ey, ...]`.
    #[wasm_bindgen(getter)]
    pub fn borders(&self) -> Vec<f64> {
        self.inner
            .borders()
            .iter()
            .flat_map(|l| [l.start.x, l.start.y, l.end.x, l.end.y])
            .collect()
    }

    /// Neighbor id per border, `NO_NEIGHBOR` for none.
    #[wasm_bindgen(getter)]
    pub fn neighbors(&self) -> Vec<i32> {
        self.inner
            .neighbors()
            .into_iter()
            .map(|n| n.map_or(-1, |id| id as i32))
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn sentinel(&self) -> bool { self.inner.is_sentinel() }

    pub fn area(&self) -> f64 { self.inner.area() }
    pub fn centroid(&self) -> Vec<f64> { self.inner.centroid().to_array().to_vec() }
}

// --- Diagram ---

#[wasm_bindgen(js_name = VoronoiDiagram)]
pub struct VoronoiDiagramWasm {
    inner: VoronoiDiagram,
}

#[wasm_bindgen(js_class = VoronoiDiagram)]
impl VoronoiDiagramWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(size: f64) -> Result<VoronoiDiagramWasm, JsError> {
        Ok(VoronoiDiagramWasm { inner: VoronoiDiagram::new(size)? })
    }

    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(&mut self, x: f64, y: f64) -> bool { self.inner.add_point(Point::new(x, y)) }

    /// Inserts flat `[x, y, x, y, ...]` coordinates and returns how many were accepted.
    #[wasm_bindgen(js_name = addPoints)]
    pub fn add_points(&mut self, coords: &[f64]) -> usize {
        self.inner
            .insert_all(coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])))
    }

    pub fn clear(&mut self) { self.inner.clear(); }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 { self.inner.size() }

    #[wasm_bindgen(getter, js_name = countCells)]
    pub fn count_cells(&self) -> usize { self.inner.len() }

    /// Id of the cell nearest to `(x, y)`.
    #[wasm_bindgen(js_name = findCell)]
    pub fn find_cell(&self, x: f64, y: f64) -> Option<usize> {
        self.inner.find_cell(Point::new(x, y)).map(Cell::id)
    }

    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, id: usize) -> Option<CellWasm> {
        self.inner.cell(id).map(|c| CellWasm { inner: c.clone() })
    }

    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> Vec<CellWasm> {
        self.inner.cells().iter().map(|c| CellWasm { inner: c.clone() }).collect()
    }
}
