//! Typed uniform buffers

use wgpu::util::DeviceExt;

const UNIFORM_USAGE: wgpu::BufferUsages =
    wgpu::BufferUsages::UNIFORM.union(wgpu::BufferUsages::COPY_DST);

/// A GPU buffer holding exactly one `T`
///
/// The last uploaded value is kept so frames where nothing changed cost no
/// queue writes.
pub struct UniformBuffer<T> {
    buffer: wgpu::Buffer,
    uploaded: Option<T>,
}

impl<T: bytemuck::Pod> UniformBuffer<T> {
    /// Zeroed buffer; the first [`UniformBuffer::write`] always uploads
    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<T>() as wgpu::BufferAddress,
            usage: UNIFORM_USAGE,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            uploaded: None,
        }
    }

    pub fn with_contents(device: &wgpu::Device, label: &str, contents: &T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(contents),
            usage: UNIFORM_USAGE,
        });

        Self {
            buffer,
            uploaded: Some(*contents),
        }
    }

    /// Queues an upload of `contents`; returns false if it matched the last one
    pub fn write(&mut self, queue: &wgpu::Queue, contents: T) -> bool {
        if !needs_upload(self.uploaded.as_ref(), &contents) {
            return false;
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&contents));
        self.uploaded = Some(contents);
        true
    }

    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

fn needs_upload<T: bytemuck::Pod>(uploaded: Option<&T>, next: &T) -> bool {
    uploaded.map_or(true, |last| {
        bytemuck::bytes_of(last) != bytemuck::bytes_of(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_skipped_only_for_identical_bytes() {
        let value = [1.0f32, 2.0, 3.0, 4.0];
        assert!(needs_upload(None, &value));
        assert!(!needs_upload(Some(&value), &value));
        assert!(needs_upload(Some(&value), &[1.0, 2.0, 3.0, 5.0]));
        // -0.0 == 0.0 as floats but not as bytes
        assert!(needs_upload(Some(&[0.0f32; 4]), &[-0.0, 0.0, 0.0, 0.0]));
    }
}
