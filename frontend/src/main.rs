fn main() {
    newwork_frontend::boot();
}
