use x86_64::instructions::port::Port;

const PIC1_CMD: u16 = 0x20;
const PIC1_DATA: u16 = 0x21;
const PIC2_CMD: u16 = 0xA0;
const PIC2_DATA: u16 = 0xA1;

const ICW1_INIT: u8 = 0x10;
const ICW1_ICW4: u8 = 0x01;
const ICW4_8086: u8 = 0x01;

// Vector bases after remap: IRQ0 lands on 32.
const PIC1_OFFSET: u8 = 0x20;
const PIC2_OFFSET: u8 = 0x28;

// Only the PIT line is unmasked; the keyboard is polled.
const PIC1_MASK: u8 = 0b1111_1110;
const PIC2_MASK: u8 = 0xFF;

pub fn init_pic() {
    unsafe {
        let mut pic1_cmd = Port::<u8>::new(PIC1_CMD);
        let mut pic1_data = Port::<u8>::new(PIC1_DATA);
        let mut pic2_cmd = Port::<u8>::new(PIC2_CMD);
        let mut pic2_data = Port::<u8>::new(PIC2_DATA);

        let _a1: u8 = pic1_data.read();
        let _a2: u8 = pic2_data.read();

        pic1_cmd.write(ICW1_INIT | ICW1_ICW4);
        pic2_cmd.write(ICW1_INIT | ICW1_ICW4);

        pic1_data.write(PIC1_OFFSET);
        pic2_data.write(PIC2_OFFSET);

        pic1_data.write(4);
        pic2_data.write(2);

        pic1_data.write(ICW4_8086);
        pic2_data.write(ICW4_8086);

        pic1_data.write(PIC1_MASK);
        pic2_data.write(PIC2_MASK);
    }
}
