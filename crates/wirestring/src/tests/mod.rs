mod concat;
mod construct;
mod oom;
