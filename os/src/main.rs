use std::env;
use std::process::Command;

fn main() {
    let uefi_img = env!("UEFI_IMG");
    let bios_img = env!("BIOS_IMG");
    println!("ChronOS UEFI disk image: {uefi_img}");
    println!("ChronOS BIOS disk image: {bios_img}");

    if env::args().any(|a| a == "--no-run") {
        return;
    }

    let mut qemu = Command::new("qemu-system-x86_64");
    if env::args().any(|a| a == "--bios") {
        qemu.arg("-drive").arg(format!("format=raw,file={bios_img}"));
    } else {
        qemu.arg("-bios").arg(ovmf_prebuilt::ovmf_pure_efi());
        qemu.arg("-drive").arg(format!("format=raw,file={uefi_img}"));
    }
    qemu.arg("-serial").arg("stdio");
    let status = qemu.status().expect("failed to launch qemu-system-x86_64");
    std::process::exit(status.code().unwrap_or(1));
}
