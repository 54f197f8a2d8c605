//! Vertex buffers that grow with the data written to them.
//!
//! The visible prefix of the trajectory changes every frame while the
//! reveal runs, so the line renderer rewrites its vertex buffer often. The
//! buffer only reallocates when the data outgrows it, doubling capacity.

use std::marker::PhantomData;

/// Smallest allocation, in bytes.
const MIN_CAPACITY: usize = 64;

/// Capacity to allocate so that `needed` bytes fit, given the current
/// capacity. Doubles, with at least 1 KiB of headroom.
fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + 1024)
}

/// Typed GPU buffer that grows on demand and never shrinks.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Empty buffer with room for `capacity` items.
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let bytes = (size_of::<T>() * capacity).max(MIN_CAPACITY);
        Self {
            buffer: allocate(device, label, bytes, usage),
            capacity: bytes,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Upload `data`, reallocating first if it does not fit.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = bytes.len();

        let reallocated = needed > self.capacity;
        if reallocated {
            let new_capacity = grown_capacity(self.capacity, needed);
            log::debug!(
                "{}: growing {} -> {} bytes",
                self.label,
                self.capacity,
                new_capacity
            );
            self.buffer =
                allocate(device, &self.label, new_capacity, self.usage);
            self.capacity = new_capacity;
        }

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last [`write`](Self::write).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last write was empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bytes currently in use.
    pub fn byte_len(&self) -> u64 {
        (self.count * size_of::<T>()) as u64
    }
}

fn allocate(
    device: &wgpu::Device,
    label: &str,
    size: usize,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size as u64,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
