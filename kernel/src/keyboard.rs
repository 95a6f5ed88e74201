use pc_keyboard::{
    layouts::Us104Key, DecodedKey, HandleControl, Keyboard as PcKeyboard, KeyCode,
    KeyEvent as PcKeyEvent, KeyState, ScancodeSet1,
};
use x86_64::instructions::port::Port;

pub enum KeyEvent {
    Char(char),
    Backspace,
    CtrlBackspace,
    Enter,
    Up,
    Down,
}

pub struct Keyboard {
    kb: PcKeyboard<Us104Key, ScancodeSet1>,
    data: Port<u8>,
    status: Port<u8>,
    ctrl_down: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            kb: PcKeyboard::new(ScancodeSet1::new(), Us104Key, HandleControl::Ignore),
            data: Port::new(0x60),
            status: Port::new(0x64),
            ctrl_down: false,
        }
    }

    fn read_scancode(&mut self) -> Option<u8> {
        let status: u8 = unsafe { self.status.read() };
        if status & 1 == 0 {
            return None;
        }
        Some(unsafe { self.data.read() })
    }

    fn note_ctrl(&mut self, evt: &PcKeyEvent) {
        if matches!(evt.code, KeyCode::LControl | KeyCode::RControl) {
            self.ctrl_down = matches!(evt.state, KeyState::Down | KeyState::SingleShot);
        }
    }

    fn backspace_event(&self) -> KeyEvent {
        if self.ctrl_down {
            KeyEvent::CtrlBackspace
        } else {
            KeyEvent::Backspace
        }
    }

    pub fn poll_event(&mut self) -> Option<KeyEvent> {
        let sc = self.read_scancode()?;
        let evt = self.kb.add_byte(sc).ok().flatten()?;
        self.note_ctrl(&evt);
        match self.kb.process_keyevent(evt)? {
            DecodedKey::Unicode(c) => match c {
                '\n' | '\r' => Some(KeyEvent::Enter),
                '\x08' => Some(self.backspace_event()),
                '\u{7f}' => None,
                _ => Some(KeyEvent::Char(c)),
            },
            DecodedKey::RawKey(k) => match k {
                KeyCode::Return => Some(KeyEvent::Enter),
                KeyCode::Backspace => Some(self.backspace_event()),
                KeyCode::ArrowUp => Some(KeyEvent::Up),
                KeyCode::ArrowDown => Some(KeyEvent::Down),
                _ => None,
            },
        }
    }
}
