//! Embedded page templates
//!
//! The landing and editor pages are served inline, the same way the rest
//! of the UI stack works: one self-contained HTML document per route, no
//! asset pipeline. Page behavior mirrors the proxy contracts: the landing
//! page derives `doc_id` with the same non-word sanitize rule as
//! `talkable_core::derive_doc_id`, and both pages use the fixed
//! `talkable_html` / `talkable_html_doc_id` local-storage keys.

/// Landing page: upload an HTML file, then move on to the editor
pub(crate) fn landing_template() -> String {
    let template = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Talkable Dev</title>
  <style>
    :root { --bg:#101820; --panel:#181f23; --card:#232e2f; --accent:#00ff99; --accent2:#00c3ff; --text:#f3f3f3; --muted:#b2fce4; }
    * { box-sizing:border-box; margin:0; padding:0; }
    body { min-height:100vh; background:linear-gradient(135deg, #101820 0%, #1a2a2f 100%); color:var(--text); font-family:Inter, system-ui, -apple-system, sans-serif; }
    nav { display:flex; align-items:center; justify-content:space-between; padding:2rem 4vw 1.5rem 4vw; }
    .brand { display:flex; align-items:center; gap:10px; font-weight:700; font-size:24px; letter-spacing:-1px; }
    .brand-icon { width:36px; height:36px; border-radius:12px; background:linear-gradient(135deg, var(--accent) 0%, var(--accent2) 100%); display:flex; align-items:center; justify-content:center; font-weight:700; font-size:22px; color:var(--bg); }
    main { display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:calc(100vh - 120px); padding:0 4vw; }
    h1 { font-size:48px; font-weight:800; margin-bottom:16px; letter-spacing:-2px; text-align:center; }
    h1 .grad { background:linear-gradient(90deg, var(--accent) 0%, var(--accent2) 100%); -webkit-background-clip:text; -webkit-text-fill-color:transparent; }
    h2 { font-size:22px; font-weight:400; color:var(--muted); margin-bottom:40px; text-align:center; }
    .upload-card { background:var(--panel); border-radius:32px; box-shadow:0 4px 32px 0 rgba(0,0,0,0.12); padding:32px; max-width:600px; width:100%; display:flex; flex-direction:column; align-items:center; gap:16px; }
    .upload-label { background:var(--card); color:var(--muted); border-radius:16px; padding:16px 32px; font-weight:500; font-size:18px; cursor:pointer; }
    .hint { color:var(--muted); font-size:15px; }
  </style>
</head>
<body>
  <nav>
    <div class="brand"><div class="brand-icon">T</div> Talkable Dev</div>
  </nav>
  <main>
    <h1>Build something <span class="grad">amazing</span> with Talkable Dev</h1>
    <h2>Create apps and websites by chatting with AI</h2>
    <div class="upload-card">
      <label class="upload-label">
        Upload your HTML file
        <input id="file" type="file" accept=".html,text/html" style="display:none" />
      </label>
      <span class="hint">(Start by uploading your HTML file for live review)</span>
    </div>
  </main>
  <script>
    const fileInput = document.getElementById('file');
    fileInput.addEventListener('change', () => {
      const file = fileInput.files && fileInput.files[0];
      if (!file) return;
      const reader = new FileReader();
      reader.onload = async (event) => {
        const html = event.target.result;
        // Same derivation as the server: \W -> _, then creation timestamp
        const docId = file.name.replace(/\W/g, '_') + '_' + Date.now();
        const metadata = { user: 'alice' };
        try {
          await fetch('/api/upload', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ html_content: html, doc_id: docId, metadata }),
          });
          localStorage.setItem('talkable_html', html);
          localStorage.setItem('talkable_html_doc_id', docId);
          window.location.href = '/editor';
        } catch (err) {
          alert('Failed to upload HTML to backend.');
        }
      };
      reader.readAsText(file);
    });
  </script>
</body>
</html>"##;
    template.to_string()
}

/// Editor page: conversation on the left, live preview on the right
pub(crate) fn editor_template() -> String {
    let template = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Talkable Dev - Editor</title>
  <style>
    :root { --bg:#101820; --panel:#181f23; --card:#232e2f; --accent:#00ff99; --accent2:#00c3ff; --text:#f3f3f3; --muted:#b2fce4; --danger:#ff4d4d; }
    * { box-sizing:border-box; margin:0; padding:0; }
    body { display:flex; height:100vh; background:var(--panel); color:var(--text); font-family:Inter, system-ui, -apple-system, sans-serif; }
    section.chat { flex:1.2; border-right:1.5px solid var(--card); display:flex; flex-direction:column; min-width:0; }
    section.preview { flex:2; display:flex; flex-direction:column; background:var(--bg); min-width:0; }
    .pane-header { padding:24px 32px; border-bottom:1.5px solid var(--card); display:flex; align-items:center; justify-content:space-between; }
    .pane-header h2 { font-weight:700; font-size:22px; }
    .scroll { flex:1; overflow-y:auto; padding:32px; }
    .placeholder { color:var(--muted); font-size:16px; }
    .msg { margin-bottom:18px; }
    .msg.user { text-align:right; }
    .bubble { display:inline-block; border-radius:12px; padding:10px 16px; max-width:320px; word-break:break-word; font-size:16px; background:var(--card); color:var(--muted); }
    .msg.user .bubble { background:#00c3ff33; color:var(--accent2); }
    .typing { color:var(--muted); font-size:16px; margin-bottom:18px; }
    .input-row { padding:24px; border-top:1.5px solid var(--card); display:flex; gap:8px; }
    .input-row input { flex:1; background:var(--card); border:none; border-radius:12px; color:var(--text); font-size:17px; padding:12px 16px; outline:none; }
    .input-row button { border:none; border-radius:12px; font-weight:700; font-size:16px; padding:0 18px; cursor:pointer; }
    #mic { background:var(--card); color:var(--muted); }
    #mic.listening { background:var(--danger); color:#fff; }
    #send { background:linear-gradient(90deg, var(--accent) 0%, var(--accent2) 100%); color:var(--bg); }
    #send:disabled, #mic:disabled { opacity:0.5; cursor:not-allowed; }
    .toggle button { border:none; border-radius:8px; font-weight:700; font-size:16px; padding:8px 20px; cursor:pointer; background:var(--card); color:var(--muted); }
    .toggle button.active { background:linear-gradient(90deg, var(--accent) 0%, var(--accent2) 100%); color:var(--bg); }
    iframe { width:100%; height:100%; min-height:400px; border:1px solid var(--card); border-radius:12px; background:#fff; }
    pre { background:var(--card); color:var(--muted); border-radius:12px; padding:24px; font-size:15px; overflow-x:auto; min-height:400px; white-space:pre-wrap; word-break:break-all; }
  </style>
</head>
<body>
  <section class="chat">
    <div class="pane-header"><h2>Conversation</h2></div>
    <div class="scroll" id="chat"></div>
    <div class="input-row">
      <input id="t" type="text" placeholder="Type your message..." />
      <button id="mic" title="Start recording">&#127908;</button>
      <button id="send">Send</button>
    </div>
  </section>
  <section class="preview">
    <div class="pane-header">
      <h2>Code / Output</h2>
      <div class="toggle">
        <button id="viewOutput" class="active">Output</button>
        <button id="viewCode">Code</button>
      </div>
    </div>
    <div class="scroll" id="previewBody"></div>
  </section>
  <script>
    const chatEl = document.getElementById('chat');
    const inputEl = document.getElementById('t');
    const sendBtn = document.getElementById('send');
    const micBtn = document.getElementById('mic');
    const previewBody = document.getElementById('previewBody');
    const outputBtn = document.getElementById('viewOutput');
    const codeBtn = document.getElementById('viewCode');

    const storedHtml = localStorage.getItem('talkable_html');
    const PLACEHOLDER = '[No HTML file uploaded yet]';

    const messages = [];
    let loading = false;
    let listening = false;
    let mediaRecorder = null;
    let audioChunks = [];
    let view = 'output';

    function renderMessages() {
      chatEl.innerHTML = '';
      if (messages.length === 0 && !loading) {
        const hint = document.createElement('div');
        hint.className = 'placeholder';
        hint.textContent = '[Chat with Talkable Dev will appear here]';
        chatEl.appendChild(hint);
        return;
      }
      for (const msg of messages) {
        const row = document.createElement('div');
        row.className = 'msg ' + (msg.role === 'user' ? 'user' : 'assistant');
        const bubble = document.createElement('span');
        bubble.className = 'bubble';
        bubble.textContent = msg.content;
        row.appendChild(bubble);
        chatEl.appendChild(row);
      }
      if (loading) {
        const typing = document.createElement('div');
        typing.className = 'typing';
        typing.textContent = 'AI is typing...';
        chatEl.appendChild(typing);
      }
      chatEl.scrollTop = chatEl.scrollHeight;
    }

    function setLoading(value) {
      loading = value;
      inputEl.disabled = value;
      sendBtn.disabled = value;
      micBtn.disabled = value;
    }

    async function sendMessage() {
      if (!inputEl.value.trim() || loading) return;
      messages.push({ role: 'user', content: inputEl.value });
      inputEl.value = '';
      setLoading(true);
      renderMessages();
      try {
        const res = await fetch('/api/chat', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ messages }),
        });
        const data = await res.json();
        messages.push({ role: 'assistant', content: data.content || '(no response)' });
      } catch (err) {
        messages.push({ role: 'assistant', content: 'Error: Could not get response.' });
      }
      setLoading(false);
      renderMessages();
    }

    async function startListening() {
      if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {
        alert('Audio recording not supported in this browser.');
        return;
      }
      try {
        const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
        mediaRecorder = new MediaRecorder(stream);
        audioChunks = [];
        mediaRecorder.ondataavailable = (event) => {
          if (event.data.size > 0) audioChunks.push(event.data);
        };
        mediaRecorder.onstop = async () => {
          const audioBlob = new Blob(audioChunks, { type: 'audio/webm' });
          const formData = new FormData();
          formData.append('file', audioBlob, 'recording.webm');
          setLoading(true);
          try {
            const response = await fetch('/chat', { method: 'POST', body: formData });
            const data = await response.json();
            inputEl.value = data.transcript || '';
          } catch (err) {
            alert('Failed to transcribe audio.');
          }
          setLoading(false);
          renderMessages();
        };
        mediaRecorder.start();
        listening = true;
        micBtn.classList.add('listening');
        micBtn.title = 'Stop recording';
      } catch (err) {
        alert('Could not access microphone.');
      }
    }

    function stopListening() {
      if (mediaRecorder && mediaRecorder.state !== 'inactive') {
        mediaRecorder.stop();
        listening = false;
        micBtn.classList.remove('listening');
        micBtn.title = 'Start recording';
      }
    }

    function renderPreview() {
      previewBody.innerHTML = '';
      outputBtn.className = view === 'output' ? 'active' : '';
      codeBtn.className = view === 'code' ? 'active' : '';
      if (view === 'output') {
        if (storedHtml) {
          const frame = document.createElement('iframe');
          frame.srcdoc = storedHtml;
          frame.title = 'Live HTML Preview';
          previewBody.appendChild(frame);
        } else {
          const hint = document.createElement('div');
          hint.className = 'placeholder';
          hint.textContent = PLACEHOLDER;
          previewBody.appendChild(hint);
        }
      } else {
        const pre = document.createElement('pre');
        pre.textContent = storedHtml || PLACEHOLDER;
        previewBody.appendChild(pre);
      }
    }

    sendBtn.addEventListener('click', sendMessage);
    inputEl.addEventListener('keydown', (e) => {
      if (e.key === 'Enter' && !loading) sendMessage();
    });
    micBtn.addEventListener('click', () => (listening ? stopListening() : startListening()));
    outputBtn.addEventListener('click', () => { view = 'output'; renderPreview(); });
    codeBtn.addEventListener('click', () => { view = 'code'; renderPreview(); });

    renderMessages();
    renderPreview();
  </script>
</body>
</html>"##;
    template.to_string()
}
