use core::mem::MaybeUninit;
use core::ptr::addr_of_mut;

use bootloader_api::info::{BootInfo, MemoryRegionKind};
use linked_list_allocator::LockedHeap;

#[global_allocator]
static ALLOCATOR: LockedHeap = LockedHeap::empty();

pub const HEAP_SIZE: usize = 256 * 1024;
static mut HEAP: MaybeUninit<[u8; HEAP_SIZE]> = MaybeUninit::uninit();

#[derive(Copy, Clone, Default)]
pub struct HeapStats {
    pub used: usize,
    pub free: usize,
    pub total: usize,
}

#[derive(Copy, Clone, Default)]
pub struct SystemStats {
    pub reserved: usize,
    pub free: usize,
    pub total: usize,
}

static mut TOTAL_RAM: usize = 0;

pub fn init_memory(boot_info: &BootInfo) {
    let total: usize = boot_info
        .memory_regions
        .iter()
        .filter(|r| r.kind == MemoryRegionKind::Usable)
        .map(|r| (r.end - r.start) as usize)
        .sum();
    unsafe {
        TOTAL_RAM = total;
        let heap_ptr = addr_of_mut!(HEAP) as *mut u8;
        ALLOCATOR.lock().init(heap_ptr, HEAP_SIZE);
    }
}

pub fn heap_stats() -> HeapStats {
    let allocator = ALLOCATOR.lock();
    let used = allocator.used();
    let free = allocator.free();
    HeapStats { used, free, total: used + free }
}

pub fn system_stats() -> SystemStats {
    let total = unsafe { TOTAL_RAM };
    let reserved = HEAP_SIZE;
    SystemStats { reserved, free: total.saturating_sub(reserved), total }
}
