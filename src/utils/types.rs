// Type aliases for data values.
pub type Vertex2 = [f64; 2];
pub type Vertex3 = [f64; 3];
pub type Triangle2 = [Vertex2; 3];
pub type Triangle3 = [Vertex3; 3];

// Type aliases for data indices.
pub type VertexIdx = usize;

// Type aliases for indices into the flat buffers the triangulator works on.
// This is to know, when a function accepts or returns a usize, what it is for.
pub type CoordIdx = usize;
pub type TriIdx = usize;
