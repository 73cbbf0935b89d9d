fn main() {
    // Only embed Windows version resources on Windows targets
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("FileDescription", "pyforge - Python script to executable front-end");
        res.set("ProductName", "pyforge");
        res.set("OriginalFilename", "pyforge.exe");

        if let Err(e) = res.compile() {
            eprintln!("Warning: Failed to compile Windows resources: {}", e);
        }
    }
}
